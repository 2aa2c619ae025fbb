use hostmerge_types::{Command, Host, ImportResponse, Os, Project, ScanResult};
use pretty_assertions::assert_eq;

#[test]
fn scan_results_decode_from_scanner_report() {
    let json = r#"[
        {"hostname": "web1.example.com", "ip": "10.0.0.1", "src": "reverse"},
        {"hostname": "db1.example.com", "ip": "10.0.0.2"}
    ]"#;

    let results: Vec<ScanResult> = serde_json::from_str(json).expect("decode");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].ip, "10.0.0.1");
    assert_eq!(results[0].hostname, "web1.example.com");
    assert_eq!(results[0].src, "reverse");
    assert_eq!(results[1].src, "");
}

#[test]
fn scan_result_requires_ip_and_hostname() {
    let missing_ip = r#"[{"hostname": "web1"}]"#;
    assert!(serde_json::from_str::<Vec<ScanResult>>(missing_ip).is_err());

    let missing_hostname = r#"[{"ip": "10.0.0.1"}]"#;
    assert!(serde_json::from_str::<Vec<ScanResult>>(missing_hostname).is_err());
}

#[test]
fn scan_result_ignores_unknown_fields() {
    let json = r#"{"ip": "10.0.0.1", "hostname": "a", "ttl": 300}"#;
    let result: ScanResult = serde_json::from_str(json).expect("decode");
    assert_eq!(result, ScanResult::new("10.0.0.1", "a"));
}

#[test]
fn project_export_decodes_lair_field_names() {
    let json = r#"{
        "_id": "proj-1",
        "name": "engagement",
        "tool": "",
        "commands": null,
        "hosts": [{
            "_id": "host-1",
            "projectId": "proj-1",
            "ipv4": "10.0.0.1",
            "longIpv4Addr": 167772161,
            "isFlagged": true,
            "lastModifiedBy": "nmap",
            "mac": "00:11:22:33:44:55",
            "os": {"tool": "nmap", "weight": 90, "fingerprint": "Linux 5.x"},
            "status": "lair-grey",
            "statusMessage": "",
            "tags": ["dmz"],
            "hostnames": null,
            "services": []
        }]
    }"#;

    let project: Project = serde_json::from_str(json).expect("decode");

    assert_eq!(project.id, "proj-1");
    assert!(project.commands.is_empty());
    assert_eq!(project.hosts.len(), 1);

    let host = &project.hosts[0];
    assert_eq!(host.ipv4, "10.0.0.1");
    assert_eq!(host.long_ipv4_addr, 167_772_161);
    assert!(host.is_flagged);
    assert_eq!(host.last_modified_by, "nmap");
    assert_eq!(
        host.os,
        Os {
            tool: "nmap".to_string(),
            weight: 90,
            fingerprint: "Linux 5.x".to_string(),
        }
    );
    assert_eq!(host.status, "lair-grey");
    assert_eq!(host.tags, vec!["dmz".to_string()]);
    assert!(host.hostnames.is_empty());
}

#[test]
fn project_serializes_with_lair_field_names() {
    let project = Project {
        id: "proj-1".to_string(),
        tool: "drone-blacksheepwall".to_string(),
        commands: vec![Command {
            tool: "drone-blacksheepwall".to_string(),
            command: String::new(),
        }],
        hosts: vec![Host::with_hostnames("10.0.0.2", vec!["db1".to_string()])],
    };

    let value = serde_json::to_value(&project).expect("serialize");

    assert_eq!(value["_id"], "proj-1");
    assert_eq!(value["commands"][0]["tool"], "drone-blacksheepwall");
    let host = &value["hosts"][0];
    assert_eq!(host["ipv4"], "10.0.0.2");
    assert_eq!(host["hostnames"], serde_json::json!(["db1"]));
    assert_eq!(host["longIpv4Addr"], 0);
    assert_eq!(host["isFlagged"], false);
    assert_eq!(host["lastModifiedBy"], "");
    assert_eq!(host["statusMessage"], "");
    assert_eq!(host["tags"], serde_json::json!([]));
}

#[test]
fn empty_host_object_takes_defaults() {
    let host: Host = serde_json::from_str("{}").expect("decode");
    assert_eq!(host, Host::default());
}

#[test]
fn import_response_accepts_both_key_casings() {
    let upper: ImportResponse =
        serde_json::from_str(r#"{"Status": "Error", "Message": "bad project"}"#).expect("decode");
    assert!(upper.is_error());
    assert_eq!(upper.message, "bad project");

    let lower: ImportResponse =
        serde_json::from_str(r#"{"status": "Ok", "message": ""}"#).expect("decode");
    assert!(!lower.is_error());
}

#[test]
fn import_response_status_comparison_is_exact() {
    let response: ImportResponse =
        serde_json::from_str(r#"{"status": "error"}"#).expect("decode");
    assert!(!response.is_error());
}
