use assert_fs::TempDir;
use assert_fs::prelude::*;
use keyswitch_catalog::{Document, expand};
use keyswitch_render::{LIBRARY_TEMPLATE, LibraryRenderer, render_library};

fn document() -> Document {
    expand().unwrap()
}

fn element<'a>(xml: &'a str, open: &str, close: &str) -> &'a str {
    let start = xml.find(open).unwrap_or_else(|| panic!("missing {open}"));
    let len = xml[start..].find(close).unwrap() + close.len();
    &xml[start..start + len]
}

#[test]
fn renders_unit_package() {
    let xml = render_library(&document()).unwrap();

    let package = element(&xml, r#"<package name="MX-1U">"#, "</package>");
    insta::assert_snapshot!(package, @r#"
    <package name="MX-1U">
    <description>Keyboard switch package!</description>
    <wire x1="-7" y1="7" x2="7" y2="7" width="0.127" layer="47"/>
    <wire x1="7" y1="7" x2="7" y2="-7" width="0.127" layer="47"/>
    <wire x1="7" y1="-7" x2="-7" y2="-7" width="0.127" layer="47"/>
    <wire x1="-7" y1="-7" x2="-7" y2="7" width="0.127" layer="47"/>
    <hole x="0" y="0" drill="4"/>
    <hole x="-5.08" y="0" drill="1.7"/>
    <hole x="5.08" y="0" drill="1.7"/>
    <pad name="MX1" x="-3.81" y="2.54" drill="1.3" diameter="2.54"/>
    <pad name="MX2" x="2.54" y="5.08" drill="1.3" diameter="2.54"/>
    <text x="0" y="-3.175" size="1.27" layer="21" align="center">&gt;NAME</text>
    <text x="0" y="-3.175" size="1.27" layer="22" rot="MR0" align="center">&gt;NAME</text>
    </package>
    "#);
}

#[test]
fn renders_device_connects() {
    let xml = render_library(&document()).unwrap();

    let device = element(
        &xml,
        r#"<device name="-ALPSMX-2U-THTSMDLED-FLIPPED""#,
        "</device>",
    );
    insta::assert_snapshot!(device, @r#"
    <device name="-ALPSMX-2U-THTSMDLED-FLIPPED" package="ALPSMX-2U-THTSMDLED-FLIPPED">
    <connects>
    <connect gate="G$1" pin="LED+" pad="LED+ SMDLED+"/>
    <connect gate="G$1" pin="LED-" pad="LED- SMDLED-"/>
    <connect gate="G$1" pin="P0" pad="ALPS1 MX1"/>
    <connect gate="G$1" pin="P1" pad="ALPS2 MX2"/>
    </connects>
    <technologies>
    <technology name=""/>
    </technologies>
    </device>
    "#);
}

#[test]
fn library_is_complete_and_unescaped() {
    let document = document();
    let xml = render_library(&document).unwrap();

    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
    assert!(xml.ends_with("</eagle>\n"));
    assert_eq!(xml.matches("<package name=").count(), document.packages.len());
    assert_eq!(xml.matches("<symbol name=").count(), 7);
    assert_eq!(xml.matches("<deviceset name=").count(), 7);
    assert_eq!(xml.matches("<device name=").count(), 210);
    for line in [
        r#"<pad name="D-" x="3.81" y="-5.08" drill="1" diameter="2" shape="square"/>"#,
        r#"<smd name="LED+" x="2.1" y="-3.775" dx="1" dy="0.75" layer="16"/>"#,
        r#"<pin name="P1" x="-2.54" y="7.62" visible="off" length="short" rot="R270"/>"#,
        r#"<gate name="G$1" symbol="KEYSWITCH-RGBSMDLED" x="0" y="0"/>"#,
    ] {
        assert!(xml.contains(line), "{line}");
    }
    assert!(!xml.contains("&amp;"));
}

#[test]
fn template_override_is_read_from_disk() {
    let temp = TempDir::new().unwrap();
    let template = temp.child("names.jinja");
    template
        .write_str("{% for package in packages %}\n{{ package.name }}\n{% endfor %}\n")
        .unwrap();

    let document = document();
    let renderer = LibraryRenderer::from_path(template.path()).unwrap();
    let rendered = renderer.render(&document).unwrap();

    let names: Vec<_> = rendered.lines().collect();
    assert_eq!(names.len(), document.packages.len());
    assert_eq!(names[0], "MX-REVERSED-6U-DIODE");
    assert_eq!(names[1], "MX-REVERSED-6U-DIODE-FLIPPED");
}

#[test]
fn missing_template_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.child("missing.jinja");

    let err = LibraryRenderer::from_path(path.path()).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read template"));
    assert!(err.to_string().contains("missing.jinja"));
}

#[test]
fn broken_template_fails_to_parse() {
    let temp = TempDir::new().unwrap();
    let template = temp.child("broken.jinja");
    template.write_str("{% for package in packages %}").unwrap();

    let renderer = LibraryRenderer::from_path(template.path()).unwrap();
    let err = renderer.render(&document()).unwrap_err();
    assert_eq!(err.to_string(), "Failed to parse library template");
}

#[test]
fn default_renderer_uses_embedded_template() {
    assert_eq!(LibraryRenderer::default().source(), LIBRARY_TEMPLATE);
}
