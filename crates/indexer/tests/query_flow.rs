use mobile_segment_index::{query_mobile, MobileMatch};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_segment_file(root: &Path, city: &str, file: &str, body: &[u8]) {
    let dir = root.join(city);
    fs::create_dir_all(&dir).expect("create city dir");
    fs::write(dir.join(file), body).expect("write segment file");
}

#[test]
fn finds_city_and_operator_for_number() {
    let temp = TempDir::new().expect("tempdir");
    write_segment_file(
        temp.path(),
        "CityA",
        "联通号段数据_修改后.csv",
        "185 号段\n1852326\n".as_bytes(),
    );

    let response = query_mobile(Some("18523266910"), temp.path());

    assert!(response.success, "{}", response.message);
    assert_eq!(response.message, "Mobile number information found.");
    assert_eq!(
        response.data,
        Some(MobileMatch {
            mobile: "18523266910".to_string(),
            city: "CityA".to_string(),
            operator: "联通".to_string(),
            three_segment: "185".to_string(),
            seven_segment: "1852326".to_string(),
        })
    );
}

#[test]
fn first_city_in_sorted_order_wins() {
    let temp = TempDir::new().expect("tempdir");
    for (city, operator) in [("B", "移动"), ("A", "联通"), ("C", "电信")] {
        write_segment_file(
            temp.path(),
            city,
            &format!("{operator}号段数据_修改后.csv"),
            "185 号段\n1852326\n".as_bytes(),
        );
    }

    let response = query_mobile(Some("18523260000"), temp.path());
    let hit = response.data.expect("match");
    assert_eq!(hit.city, "A");
    assert_eq!(hit.operator, "联通");
}

#[test]
fn gbk_encoded_file_is_searchable() {
    let temp = TempDir::new().expect("tempdir");
    let (body, _, had_errors) =
        encoding_rs::GBK.encode("地区,139 号段,138 号段\n渝中,1390000,1380000\n");
    assert!(!had_errors);
    write_segment_file(temp.path(), "重庆", "移动号段数据_修改后.csv", &body);

    let response = query_mobile(Some("13800001234"), temp.path());
    let hit = response.data.expect("match");
    assert_eq!(hit.city, "重庆");
    assert_eq!(hit.operator, "移动");
    assert_eq!(hit.three_segment, "138");
}

#[test]
fn prefix_must_sit_under_its_own_three_bucket() {
    let temp = TempDir::new().expect("tempdir");
    // 1852326 filed under the 186 column.
    write_segment_file(
        temp.path(),
        "CityA",
        "联通号段数据_修改后.csv",
        "186 号段\n1852326\n".as_bytes(),
    );

    let response = query_mobile(Some("18523266910"), temp.path());
    assert!(!response.success);
    assert_eq!(response.data, None);
}

#[test]
fn first_operator_scanned_in_city_wins() {
    let temp = TempDir::new().expect("tempdir");
    // The leading space sorts this file first even though "联通" > "移动".
    for file in [" 联通号段数据_修改后.csv", "移动号段数据_修改后.csv"] {
        write_segment_file(temp.path(), "CityA", file, "185 号段\n1852326\n".as_bytes());
    }

    let response = query_mobile(Some("18523266910"), temp.path());
    let hit = response.data.expect("match");
    assert_eq!(hit.city, "CityA");
    assert_eq!(hit.operator, "联通");
}

#[test]
fn utf8_file_with_corrupt_byte_is_searchable() {
    let temp = TempDir::new().expect("tempdir");
    let mut body = "地区,185 号段\n渝中,1852326\n".as_bytes().to_vec();
    body.extend_from_slice(b"\xff,1852327\n");
    write_segment_file(temp.path(), "CityA", "联通号段数据_修改后.csv", &body);

    let response = query_mobile(Some("18523266910"), temp.path());
    assert!(response.success, "{}", response.message);
    assert_eq!(response.data.expect("match").operator, "联通");
}
