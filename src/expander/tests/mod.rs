use super::*;
use serde_json::json;
use yare::parameterized;


const ACL: &str = "AWS::EC2::NetworkAcl";
const ENTRY: &str = "AWS::EC2::NetworkAclEntry";

/// A fragment holding a single ACL named `NaclPublic` with `properties`.
fn acl_fragment(properties: Value) -> Fragment {
    Fragment::new(json!({
        "Resources": {
            "NaclPublic": {
                "Type": ACL,
                "Properties": properties
            }
        }
    }))
}

fn expand(fragment: &Fragment) -> Fragment {
    NaclExpander::default().expand(fragment).unwrap()
}

fn sorted_names(fragment: &Fragment) -> Vec<String> {
    let mut names: Vec<String> = fragment.resources().unwrap().keys().cloned().collect();
    names.sort();
    names
}

/// Asserts none of the expandable properties survived on `NaclPublic`.
fn assert_parent_stripped(fragment: &Fragment) {
    let parent = fragment.resource("NaclPublic").unwrap();
    assert_eq!(parent["Type"], json!(ACL));
    if let Some(properties) = parent.get("Properties") {
        for key in ["Inbound", "Outbound", "Association"] {
            assert!(properties.get(key).is_none(), "{key} left on parent");
        }
    }
}

#[test]
fn test_non_acl_passed_through() {
    let fragment = Fragment::new(json!({
        "Resources": {
            "S3Bucket": { "Type": "AWS::S3::Bucket" }
        }
    }));
    let expanded = expand(&fragment);
    assert_eq!(expanded, fragment);
    assert_eq!(sorted_names(&expanded), vec!["S3Bucket"]);
}

#[test]
fn test_untouched_resources_keep_property_order() {
    let fragment = Fragment::new(json!({
        "Resources": {
            "Bucket": {
                "Type": "AWS::S3::Bucket",
                "Properties": { "Zeta": 1, "Alpha": 2, "Mid": { "Ref": "Thing" } }
            },
            "NaclPublic": {
                "Type": ACL,
                "Properties": {
                    "VpcId": { "Ref": "VPC" },
                    "Inbound": ["100,6,allow,0.0.0.0/0,443"],
                    "Tags": [{ "Key": "Name", "Value": "public" }]
                }
            }
        },
        "Outputs": { "AclId": { "Value": { "Ref": "NaclPublic" } } }
    }));
    let expanded = expand(&fragment);
    let out = serde_json::to_string(expanded.resource("Bucket").unwrap()).unwrap();
    assert_eq!(
        out,
        r#"{"Type":"AWS::S3::Bucket","Properties":{"Zeta":1,"Alpha":2,"Mid":{"Ref":"Thing"}}}"#
    );
    let parent = serde_json::to_string(expanded.resource("NaclPublic").unwrap()).unwrap();
    assert_eq!(
        parent,
        r#"{"Type":"AWS::EC2::NetworkAcl","Properties":{"VpcId":{"Ref":"VPC"},"Tags":[{"Key":"Name","Value":"public"}]}}"#
    );
    assert_eq!(expanded.as_value()["Outputs"], fragment.as_value()["Outputs"]);
}

#[test]
fn test_synthesized_resources_follow_existing_ones() {
    let fragment = acl_fragment(json!({
        "Association": ["SubnetA"],
        "Outbound": ["100,6,allow,0.0.0.0/0,443"],
        "Inbound": ["100,6,allow,0.0.0.0/0,443", "200,6,allow,0.0.0.0/0,80"]
    }));
    let expanded = expand(&fragment);
    let names: Vec<&String> = expanded.resources().unwrap().keys().collect();
    assert_eq!(
        names,
        vec![
            "NaclPublic",
            "NaclPublicInbound100",
            "NaclPublicInbound200",
            "NaclPublicOutbound100",
            "SubnetANaclPublic",
        ]
    );
    assert_parent_stripped(&expanded);
}

#[test]
fn test_input_fragment_is_not_modified() {
    let fragment = acl_fragment(json!({ "Inbound": ["100,6,allow,0.0.0.0/0,443"] }));
    let before = fragment.clone();
    let _ = expand(&fragment);
    assert_eq!(fragment, before);
}

#[test]
fn test_second_pass_is_noop() {
    let fragment = acl_fragment(json!({
        "Inbound": ["100,6,allow,0.0.0.0/0,443"],
        "Association": ["SubnetA"]
    }));
    let once = expand(&fragment);
    let twice = expand(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_acl_without_properties_passes_through() {
    let fragment = Fragment::new(json!({
        "Resources": { "NaclPublic": { "Type": ACL } }
    }));
    assert_eq!(expand(&fragment), fragment);
}

#[test]
fn test_custom_acl_type() {
    let expander = NaclExpander::new(
        ExpanderConfig::builder()
            .acl_type("Custom::NetworkAcl")
            .build(),
    );
    let fragment = Fragment::new(json!({
        "Resources": {
            "NaclPublic": {
                "Type": "Custom::NetworkAcl",
                "Properties": { "Inbound": ["100,6,allow,0.0.0.0/0,443"] }
            }
        }
    }));
    let expanded = expander.expand(&fragment).unwrap();
    assert_eq!(
        expanded.resource("NaclPublicInbound100").unwrap()["Type"],
        json!(ENTRY)
    );
}

#[test]
fn test_collision_last_write_wins() {
    let fragment = Fragment::new(json!({
        "Resources": {
            "NaclPublic": {
                "Type": ACL,
                "Properties": { "Inbound": ["100,6,allow,0.0.0.0/0,443"] }
            },
            "NaclPublicInbound100": { "Type": "AWS::S3::Bucket" }
        }
    }));
    let expanded = expand(&fragment);
    assert_eq!(
        expanded.resource("NaclPublicInbound100").unwrap()["Type"],
        json!(ENTRY)
    );
    assert_eq!(expanded.resources().unwrap().len(), 2);
}

#[parameterized(
    missing_resources = { json!({ "Outputs": {} }) },
    resource_not_mapping = { json!({ "Resources": { "NaclPublic": "nope" } }) },
    properties_not_mapping = { json!({ "Resources": { "NaclPublic": { "Type": ACL, "Properties": [] } } }) },
    inbound_not_list = { json!({ "Resources": { "NaclPublic": { "Type": ACL, "Properties": { "Inbound": "100,6,allow,0.0.0.0/0,443" } } } }) },
    rule_not_string = { json!({ "Resources": { "NaclPublic": { "Type": ACL, "Properties": { "Outbound": [100] } } } }) },
    subnet_not_string = { json!({ "Resources": { "NaclPublic": { "Type": ACL, "Properties": { "Association": [{ "Ref": "SubnetA" }] } } } }) },
)]
fn test_invalid_format(fragment: Value) {
    let err = NaclExpander::default()
        .expand(&Fragment::new(fragment))
        .unwrap_err();
    assert!(matches!(err, MacroError::InvalidFormat(_)), "{err}");
}

#[test]
fn test_malformed_rule_fails_whole_expansion() {
    let fragment = acl_fragment(json!({
        "Inbound": ["100,6,allow,0.0.0.0/0,443", "200,6,allow"]
    }));
    let err = NaclExpander::default().expand(&fragment).unwrap_err();
    assert_eq!(
        err,
        MacroError::FieldCount {
            row: "200,6,allow".to_string(),
            expected: 5,
            found: 3,
        }
    );
}

#[test]
fn test_handle_echoes_request_id() {
    let request: MacroRequest = serde_json::from_value(json!({
        "region": "ap-southeast-2",
        "requestId": "testRequest",
        "fragment": {
            "Resources": {
                "NaclPublic": {
                    "Type": ACL,
                    "Properties": { "Inbound": ["100,6,allow,0.0.0.0/0,443"] }
                }
            }
        }
    }))
    .unwrap();
    let response = NaclExpander::default().handle(request).unwrap();
    assert_eq!(response.request_id, "testRequest");
    assert_eq!(response.status, crate::types::MacroStatus::Success);
    let fragment = response.fragment.unwrap();
    assert_eq!(
        sorted_names(&fragment),
        vec!["NaclPublic", "NaclPublicInbound100"]
    );
}

#[test]
fn test_handle_propagates_errors() {
    let request = MacroRequest {
        request_id: "testRequest".to_string(),
        fragment: acl_fragment(json!({ "Inbound": ["100,6,allow,'{\"Ref\": ',443"] })),
        template_parameter_values: None,
        region: None,
    };
    let err = NaclExpander::default().handle(request).unwrap_err();
    assert!(matches!(err, MacroError::ExpressionError { .. }));
}
