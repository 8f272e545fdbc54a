use proptest::option;
use proptest::prelude::*;
use viz_types::codec::{from_json, from_json_slice, to_json, to_json_pretty};
use viz_types::{
    DEFAULT_VIZ_HEIGHT, VizChat, VizChatId, VizChatMessage,
    VizChatMessageId, VizChatMessageRole, VizChats, VizContent, VizFile, VizFileId, VizFiles,
    VizId, VizLicense, VizTimestamp, VizTypesError,
};

fn timestamp() -> impl Strategy<Value = VizTimestamp> {
    (0i64..4_000_000_000).prop_map(VizTimestamp::from_seconds)
}

fn message() -> impl Strategy<Value = VizChatMessage> {
    (
        prop_oneof![Just(VizChatMessageRole::User), Just(VizChatMessageRole::Assistant)],
        ".{0,30}",
        timestamp(),
        option::of("[a-z0-9]{8}".prop_map(VizChatMessageId::from)),
    )
        .prop_map(|(role, content, timestamp, id)| VizChatMessage {
            role,
            content,
            timestamp,
            id,
        })
}

fn chat() -> impl Strategy<Value = VizChat> {
    (
        "[a-z0-9]{8}",
        option::of(".{0,20}"),
        proptest::collection::vec(message(), 0..5),
        timestamp(),
        timestamp(),
        option::of(".{0,20}"),
        option::of(".{0,20}"),
    )
        .prop_map(|(id, title, messages, created_at, updated_at, ai_scratchpad, ai_status)| VizChat {
            id: VizChatId::from(id),
            title,
            messages,
            created_at,
            updated_at,
            ai_scratchpad,
            ai_status,
        })
}

fn content() -> impl Strategy<Value = VizContent> {
    (
        "[0-9a-f]{32}",
        proptest::collection::hash_map("[a-z0-9]{6}", ("[a-z]{1,8}\\.js", ".{0,40}"), 0..6),
        option::of(".{0,20}"),
        option::of(0.0f64..5_000.0),
        option::of(prop_oneof![Just("MIT"), Just("Apache-2.0"), Just("ISC")].prop_map(VizLicense::new)),
        option::of(any::<bool>()),
        option::of(proptest::collection::vec(chat(), 0..3).prop_map(|chats| chats.into_iter().collect::<VizChats>())),
    )
        .prop_map(|(id, files, title, height, license, is_interacting, chats)| VizContent {
            id: VizId::from(id),
            files: files
                .into_iter()
                .map(|(id, (name, text))| (VizFileId::from(id), VizFile::new(name, text)))
                .collect(),
            title,
            height,
            license,
            is_interacting,
            chats,
        })
}

proptest! {
    #[test]
    fn content_round_trips_field_for_field(original in content()) {
        let json = to_json(&original).unwrap();
        let decoded: VizContent = from_json(&json).unwrap();
        prop_assert_eq!(&decoded, &original);

        let pretty = to_json_pretty(&original).unwrap();
        prop_assert_eq!(from_json_slice::<VizContent>(pretty.as_bytes()).unwrap(), original);
    }

    #[test]
    fn any_finite_height_round_trips_exactly(
        height in any::<f64>().prop_filter("finite", |h| h.is_finite())
    ) {
        let mut content = VizContent::new(VizId::from("v"));
        content.height = Some(height);

        let decoded: VizContent = from_json(&to_json(&content).unwrap()).unwrap();
        prop_assert_eq!(decoded.height.map(f64::to_bits), Some(height.to_bits()));
    }
}

#[test]
fn fractional_height_round_trips_exactly() {
    let mut content = VizContent::new(VizId::from("v"));
    content.height = Some(1473.7535583454699);

    let decoded: VizContent = from_json(&to_json(&content).unwrap()).unwrap();
    assert_eq!(decoded.height, Some(1473.7535583454699));
}

#[test]
fn non_finite_height_fails_to_encode() {
    for height in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        let mut content = VizContent::new(VizId::from("v"));
        content.height = Some(height);

        let err = to_json(&content).unwrap_err();
        assert!(matches!(err, VizTypesError::Serialization(_)), "height {height} encoded");
        assert!(to_json_pretty(&content).is_err());
    }
}

#[test]
fn minimal_content_omits_optional_fields() {
    let content = VizContent::new(VizId::from("a1b2"));
    assert_eq!(to_json(&content).unwrap(), r#"{"id":"a1b2","files":{}}"#);

    let decoded: VizContent = from_json(r#"{"id":"a1b2","files":{}}"#).unwrap();
    assert!(decoded.title.is_none());
    assert!(decoded.height.is_none());
    assert!(decoded.license.is_none());
    assert!(decoded.is_interacting.is_none());
    assert!(decoded.chats.is_none());
}

#[test]
fn explicit_null_decodes_to_absent() {
    let decoded: VizContent =
        from_json(r#"{"id":"a1b2","files":{},"title":null,"height":null,"isInteracting":null}"#)
            .unwrap();
    assert!(decoded.title.is_none());
    assert!(decoded.height.is_none());
    assert!(decoded.is_interacting.is_none());
    assert_eq!(to_json(&decoded).unwrap(), r#"{"id":"a1b2","files":{}}"#);
}

#[test]
fn set_defaults_are_distinct_from_unset() {
    let mut content = VizContent::new(VizId::from("v"));
    content.height = Some(DEFAULT_VIZ_HEIGHT);
    content.license = Some(VizLicense::new("MIT"));
    content.is_interacting = Some(false);

    let decoded: VizContent = from_json(&to_json(&content).unwrap()).unwrap();
    assert_eq!(decoded.height, Some(DEFAULT_VIZ_HEIGHT));
    assert_eq!(decoded.license.as_ref().map(VizLicense::as_str), Some("MIT"));
    assert_eq!(decoded.is_interacting, Some(false));
    assert_ne!(decoded, VizContent::new(VizId::from("v")));
}

#[test]
fn effective_values_fall_back_when_unset() {
    let mut content = VizContent::new(VizId::from("v"));
    assert_eq!(content.effective_height(), 500.0);
    assert_eq!(content.effective_license(), None);
    assert!(!content.is_interacting());

    content.height = Some(960.0);
    content.license = Some(VizLicense::new("Apache-2.0"));
    content.is_interacting = Some(true);
    assert_eq!(content.effective_height(), 960.0);
    assert_eq!(content.effective_license(), Some("Apache-2.0"));
    assert!(content.is_interacting());
}

#[test]
fn decodes_frontend_shaped_json() {
    let json = r#"{
        "id": "f2c6c0b2d1d04b3e9f3f0a6a3b3c4d5e",
        "files": {
            "7294": { "name": "index.html", "text": "<body>Hello</body>" },
            "1830": { "name": "index.js", "text": "console.log('hi')" }
        },
        "title": "Bar Chart",
        "license": "MIT",
        "isInteracting": true,
        "chats": {
            "c1": {
                "id": "c1",
                "messages": [
                    { "role": "user", "content": "hi", "timestamp": 1700000000, "id": "m1" }
                ],
                "createdAt": 1700000000,
                "updatedAt": 1700000000,
                "aiStatus": "Thinking..."
            }
        }
    }"#;

    let content: VizContent = from_json(json).unwrap();
    assert_eq!(content.title.as_deref(), Some("Bar Chart"));
    assert_eq!(content.file_text("index.js"), Some("console.log('hi')"));
    assert!(content.is_interacting());
    assert!(content.id.to_uuid().is_ok());

    let chat = content.chats.as_ref().unwrap().get(&VizChatId::from("c1")).unwrap();
    assert_eq!(chat.ai_status.as_deref(), Some("Thinking..."));
    assert!(chat.ai_scratchpad.is_none());
    assert_eq!(chat.messages[0].id.as_ref().unwrap().as_str(), "m1");
}

#[test]
fn chats_mut_creates_map_on_first_use() {
    let mut content = VizContent::new(VizId::from("v"));
    assert!(content.chats.is_none());

    content
        .chats_mut()
        .insert(VizChat::new(VizChatId::from("c"), VizTimestamp::from_seconds(1)));
    assert_eq!(content.chats.as_ref().map(VizChats::len), Some(1));
}

#[test]
fn files_must_be_present() {
    let err = from_json::<VizContent>(r#"{"id":"v"}"#).unwrap_err();
    assert!(matches!(err, VizTypesError::Serialization(_)));
}

#[test]
fn files_field_accepts_empty_map() {
    let content: VizContent = from_json(r#"{"id":"v","files":{}}"#).unwrap();
    assert_eq!(content.files, VizFiles::new());
}
