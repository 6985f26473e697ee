use pretty_assertions::assert_eq;

use super::*;

#[test]
fn default_template() {
    let template = FileNameTemplate::parse(DEFAULT_FILE_NAME_TEMPLATE).unwrap();
    assert_eq!(FileNameTemplate::default(), template);
    assert_eq!("playbook_a.yaml", template.render("a"));
}

#[test]
fn placeholder_whitespace_is_optional() {
    let template = FileNameTemplate::parse("${{id}}.yml").unwrap();
    assert_eq!("web.yml", template.render("web"));

    let template = FileNameTemplate::parse("pb-${{   id }}").unwrap();
    assert_eq!("pb-web", template.render("web"));
}

#[test]
fn id_can_repeat() {
    let template = FileNameTemplate::parse("${{ id }}-${{ id }}.yaml").unwrap();
    assert_eq!("7-7.yaml", template.render("7"));
}

#[test]
fn escaped_dollar() {
    let template = FileNameTemplate::parse("$$${{ id }}.yaml").unwrap();
    assert_eq!("$a.yaml", template.render("a"));
}

#[test]
fn unknown_variable() {
    let err = FileNameTemplate::parse("playbook_${{ name }}.yaml").unwrap_err();
    assert!(err.to_string().contains("unknown variable `name`"), "{}", err);
}

#[test]
fn missing_id() {
    let err = FileNameTemplate::parse("playbook.yaml").unwrap_err();
    assert!(err.to_string().contains("must use ${{ id }}"), "{}", err);
}

#[test]
fn empty_template() {
    assert!(FileNameTemplate::parse("").is_err());
}

#[test]
fn unterminated_placeholder() {
    assert!(FileNameTemplate::parse("playbook_${{ id .yaml").is_err());
}

#[test]
fn stray_dollar() {
    assert!(FileNameTemplate::parse("playbook_$id.yaml").is_err());
}

#[test]
fn render_checked_accepts_plain_names() {
    let template = FileNameTemplate::default();
    assert_eq!("playbook_web-01.yaml", template.render_checked("web-01").unwrap());
}

#[test]
fn render_checked_rejects_paths() {
    let template = FileNameTemplate::default();
    assert!(template.render_checked("a/b").is_err());

    let template = FileNameTemplate::parse("${{ id }}").unwrap();
    assert!(template.render_checked("..").is_err());
    assert!(template.render_checked("/etc/passwd").is_err());
    assert!(template.render_checked("").is_err());
}
