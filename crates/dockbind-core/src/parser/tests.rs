use super::*;
use crate::model::{AccessMode, PropagationMode, SelContext};

fn assert_defaults(bind: &Bind) {
    assert_eq!(bind.access_mode(), AccessMode::ReadWrite);
    assert_eq!(bind.sel_context(), &SelContext::None);
    assert_eq!(bind.no_copy(), None);
    assert_eq!(bind.propagation_mode(), PropagationMode::Default);
}

fn assert_invalid(spec: &str) -> InvalidBind {
    match parse_bind(spec) {
        Err(BindError::InvalidSpecification { spec: s, cause }) => {
            assert_eq!(s, spec);
            cause
        }
        Ok(bind) => panic!("'{}' should not parse, got {:?}", spec, bind),
    }
}

#[test]
fn test_parse_two_fields() {
    for (spec, host, container) in [
        ("/a:/b", "/a", "/b"),
        ("/host:/container", "/host", "/container"),
        ("/var/lib/data:/data", "/var/lib/data", "/data"),
        ("./relative:/app", "./relative", "/app"),
        ("named-volume:/srv", "named-volume", "/srv"),
    ] {
        let bind = parse_bind(spec).unwrap();
        assert_eq!(bind.host_path(), host);
        assert_eq!(bind.volume().path(), container);
        assert_defaults(&bind);
    }
}

#[test]
fn test_parse_read_only() {
    let bind = parse_bind("/a:/b:ro").unwrap();

    assert_eq!(bind.host_path(), "/a");
    assert_eq!(bind.volume().path(), "/b");
    assert_eq!(bind.access_mode(), AccessMode::ReadOnly);
    assert_eq!(bind.sel_context(), &SelContext::None);
    assert_eq!(bind.no_copy(), None);
    assert_eq!(bind.propagation_mode(), PropagationMode::Default);
}

#[test]
fn test_parse_read_only_with_private_selinux() {
    let bind = parse_bind("/a:/b:ro,Z").unwrap();

    assert_eq!(bind.access_mode(), AccessMode::ReadOnly);
    assert_eq!(bind.sel_context(), &SelContext::Private);
}

#[test]
fn test_parse_shared_selinux_only() {
    let bind = parse_bind("/a:/b:z").unwrap();

    assert_eq!(bind.access_mode(), AccessMode::ReadWrite);
    assert_eq!(bind.sel_context(), &SelContext::Shared);
}

#[test]
fn test_parse_nocopy() {
    let bind = parse_bind("/a:/b:nocopy").unwrap();

    assert_eq!(bind.no_copy(), Some(true));
    assert_eq!(bind.access_mode(), AccessMode::ReadWrite);
}

#[test]
fn test_parse_propagation_modes() {
    assert_eq!(
        parse_bind("/a:/b:shared").unwrap().propagation_mode(),
        PropagationMode::Shared
    );
    assert_eq!(
        parse_bind("/a:/b:ro,slave").unwrap().propagation_mode(),
        PropagationMode::Slave
    );
    assert_eq!(
        parse_bind("/a:/b:rw,private").unwrap().propagation_mode(),
        PropagationMode::Private
    );
}

#[test]
fn test_parse_uppercase_access_mode() {
    let bind = parse_bind("/a:/b:RO").unwrap();
    assert_eq!(bind.access_mode(), AccessMode::ReadOnly);
}

#[test]
fn test_parse_windows_host_path() {
    let bind = parse_bind("C:\\Users\\x:/data").unwrap();

    assert_eq!(bind.host_path(), "C:\\Users\\x");
    assert_eq!(bind.volume().path(), "/data");
    assert_defaults(&bind);
}

#[test]
fn test_parse_windows_host_path_with_flags() {
    let bind = parse_bind("d:\\projects\\app:/app:ro,nocopy").unwrap();

    assert_eq!(bind.host_path(), "d:\\projects\\app");
    assert_eq!(bind.volume().path(), "/app");
    assert_eq!(bind.access_mode(), AccessMode::ReadOnly);
    assert_eq!(bind.no_copy(), Some(true));
}

#[test]
fn test_parse_windows_both_sides() {
    let bind = parse_bind("C:\\src:C:\\dst").unwrap();

    assert_eq!(bind.host_path(), "C:\\src");
    assert_eq!(bind.volume().path(), "C:\\dst");
}

#[test]
fn test_parse_custom_selinux_label() {
    // ラベル中の ':' は3番目のフィールドにそのまま残る
    let bind = parse_bind("/a:/b:ro,system_u:object_r:svirt_sandbox_file_t:s0").unwrap();

    assert_eq!(bind.access_mode(), AccessMode::ReadOnly);
    assert_eq!(
        bind.sel_context(),
        &SelContext::custom("system_u:object_r:svirt_sandbox_file_t:s0").unwrap()
    );
}

#[test]
fn test_parse_empty_fails() {
    assert_eq!(assert_invalid(""), InvalidBind::Unsplittable);
}

#[test]
fn test_parse_leading_colon_fails() {
    assert_eq!(assert_invalid(":/b"), InvalidBind::Unsplittable);
}

#[test]
fn test_parse_single_field_fails() {
    assert_eq!(assert_invalid("/only"), InvalidBind::FieldCount(1));
    assert_eq!(assert_invalid("C:\\only"), InvalidBind::FieldCount(1));
    assert_eq!(assert_invalid("/a:"), InvalidBind::FieldCount(1));
}

#[test]
fn test_parse_unknown_access_mode_fails() {
    assert_eq!(
        assert_invalid("/a:/b:xx"),
        InvalidBind::UnknownAccessMode("xx".to_string())
    );
}

#[test]
fn test_parse_unknown_flag_fails() {
    assert_eq!(
        assert_invalid("/a:/b:ro,bogus"),
        InvalidBind::InvalidSelContext("bogus".to_string())
    );
    // 余分な ':' はフラグ側に取り込まれ、解釈できなければ失敗する
    assert!(matches!(
        assert_invalid("/a:/b:ro:extra"),
        InvalidBind::InvalidSelContext(_)
    ));
}

#[test]
fn test_error_message_contains_spec() {
    let err = parse_bind("/a:/b:xx").unwrap_err();
    let message = err.to_string();

    assert!(message.contains("/a:/b:xx"));
    assert!(message.contains("xx"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_trailing_colon_yields_defaults() {
    let bind = parse_bind("/a:/b:").unwrap();
    assert_defaults(&bind);
}

#[test]
fn test_format_then_parse_preserves_fields() {
    let cases = [
        BindOptions {
            access_mode: AccessMode::ReadOnly,
            ..Default::default()
        },
        BindOptions {
            access_mode: AccessMode::ReadOnly,
            sel_context: SelContext::Private,
            no_copy: Some(true),
            propagation_mode: PropagationMode::Shared,
        },
        BindOptions {
            access_mode: AccessMode::ReadOnly,
            sel_context: SelContext::custom("user_u:role_r:type_t:s0").unwrap(),
            no_copy: None,
            propagation_mode: PropagationMode::Slave,
        },
    ];

    for options in cases {
        for (host, container) in [("/srv/www", "/var/www"), ("C:\\www", "/www")] {
            let original = Bind::new(host, Volume::new(container), options.clone());
            let reparsed = parse_bind(&original.to_string()).unwrap();
            assert_eq!(reparsed, original);
        }
    }
}

#[test]
fn test_format_then_parse_collapses_no_copy_false() {
    let original = Bind::new(
        "/a",
        Volume::new("/b"),
        BindOptions {
            access_mode: AccessMode::ReadOnly,
            no_copy: Some(false),
            ..Default::default()
        },
    );
    let reparsed = parse_bind(&original.to_string()).unwrap();

    assert_eq!(reparsed.no_copy(), None);
    assert_eq!(reparsed.host_path(), original.host_path());
    assert_eq!(reparsed.volume(), original.volume());
    assert_eq!(reparsed.access_mode(), original.access_mode());
}

#[test]
fn test_parse_then_format_makes_access_mode_explicit() {
    assert_eq!(parse_bind("/a:/b").unwrap().to_string(), "/a:/b:rw");
    assert_eq!(
        parse_bind("/a:/b:private,nocopy,Z").unwrap().to_string(),
        "/a:/b:rw,Z,nocopy,private"
    );
}

#[test]
fn test_format_then_parse_single_letter_container() {
    let original = Bind::new(
        "/a",
        Volume::new("b"),
        BindOptions {
            access_mode: AccessMode::ReadOnly,
            ..Default::default()
        },
    );
    assert_eq!(original.to_string(), "/a:b:ro");

    let reparsed = parse_bind(&original.to_string()).unwrap();
    assert_eq!(reparsed, original);

    let two_fields = parse_bind("/a:b").unwrap();
    assert_eq!(two_fields.volume().path(), "b");
    assert_defaults(&two_fields);
}

#[test]
fn test_parse_windows_container_after_separator() {
    let bind = parse_bind("/a:D:\\dst:ro").unwrap();

    assert_eq!(bind.volume().path(), "D:\\dst");
    assert_eq!(bind.access_mode(), AccessMode::ReadOnly);
}

#[test]
fn test_custom_label_cannot_shadow_other_flags() {
    for label in ["shared", "z", "bogus", "a,b:c:d"] {
        assert_eq!(
            SelContext::custom(label),
            Err(InvalidBind::InvalidSelContext(label.to_string()))
        );
    }

    // 生成できるラベルは常に同じ値に戻る
    let context = SelContext::custom("system_u:object_r:container_file_t:s0:c1").unwrap();
    let original = Bind::new(
        "/a",
        Volume::new("/b"),
        BindOptions {
            access_mode: AccessMode::ReadOnly,
            sel_context: context,
            no_copy: None,
            propagation_mode: PropagationMode::Private,
        },
    );
    let reparsed = parse_bind(&original.to_string()).unwrap();
    assert_eq!(reparsed.sel_context(), original.sel_context());
    assert_eq!(reparsed.propagation_mode(), PropagationMode::Private);
}
