use serde_json::json;
use sitegen_core::{Document, Warning};
use sitegen_render::{
    CoverageRegistry, DispatchOptions, Dispatcher, FALLBACK_IMAGE, Layout, RenderBlock, dispatch,
};

const BISTRO: &str = include_str!("fixtures/bistro.json");

fn bistro() -> Document {
    Document::from_json_str(BISTRO).unwrap()
}

#[test]
fn blocks_follow_document_order() {
    let result = dispatch(&bistro());
    let ids: Vec<&str> = result.blocks.iter().map(|b| b.id()).collect();
    assert_eq!(
        ids,
        vec!["nav", "hero", "menu", "press", "carousel", "hours", "c7", "c8"]
    );
}

#[test]
fn unknown_and_malformed_entries_become_placeholders() {
    let result = dispatch(&bistro());
    let placeholders: Vec<&RenderBlock> =
        result.blocks.iter().filter(|b| b.is_placeholder()).collect();
    assert_eq!(placeholders.len(), 2);
    assert!(matches!(
        placeholders[0],
        RenderBlock::Placeholder { component_type, message, .. }
            if component_type == "Carousel3D" && message == "Unknown component type: Carousel3D"
    ));
    assert!(matches!(
        placeholders[1],
        RenderBlock::Placeholder { component_type, .. } if component_type.is_empty()
    ));

    let unknown: Vec<&str> = result.unknown_types.iter().map(String::as_str).collect();
    assert_eq!(unknown, vec!["", "Carousel3D"]);
    assert!(
        result
            .diagnostics
            .warnings
            .iter()
            .all(|w| matches!(w, Warning::UnknownComponent { .. }))
    );
}

#[test]
fn site_metadata_comes_from_envelope() {
    let result = dispatch(&bistro());
    assert_eq!(result.site.title, "Luigi's Bistro");
    assert_eq!(result.site.domain_hint, "luigisbistro.com");
}

#[test]
fn layouts_and_image_policy_apply() {
    let result = dispatch(&bistro());
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["blocks"][0]["layout"], "bare");
    assert_eq!(value["blocks"][1]["layout"], "section");
    assert_eq!(value["blocks"][3]["props"]["logos"][0]["src"], FALLBACK_IMAGE);
    assert_eq!(
        value["blocks"][3]["props"]["logos"][1]["src"],
        "https://cdn.test/post.png"
    );
    assert_eq!(
        value["blocks"][5]["props"]["items"][0],
        json!({"day": "Mon-Fri", "open": "5pm", "close": "11pm"})
    );
    assert_eq!(value["unknownTypes"], json!(["", "Carousel3D"]));
}

#[test]
fn custom_options_are_respected() {
    let registry = CoverageRegistry::default();
    let options: DispatchOptions =
        serde_json::from_value(json!({"replaceRelativeImages": false})).unwrap();
    assert_eq!(options.fallback_image, FALLBACK_IMAGE);
    let result = Dispatcher::new(&registry)
        .with_options(options)
        .dispatch(&bistro());
    match &result.blocks[3] {
        RenderBlock::Component { layout, props, .. } => {
            assert_eq!(*layout, Layout::Section);
            assert_eq!(props.to_value()["logos"][0]["src"], "/logos/times.png");
        }
        other => panic!("expected a component block, got {:?}", other),
    }
}

#[test]
fn dispatch_result_snapshot() {
    let document = Document::from_value(&json!({
        "websiteName": "Cafe",
        "components": [
            {"id": "d", "type": "Divider", "props": {"size": "sm"}},
            {"id": "x", "type": "Mystery"}
        ]
    }))
    .unwrap();
    insta::assert_json_snapshot!(dispatch(&document), @r#"
    {
      "site": {
        "title": "Cafe",
        "domainHint": "cafe.com"
      },
      "blocks": [
        {
          "type": "component",
          "id": "d",
          "name": "Divider",
          "layout": "bare",
          "props": {
            "size": "sm"
          }
        },
        {
          "type": "placeholder",
          "id": "x",
          "componentType": "Mystery",
          "message": "Unknown component type: Mystery"
        }
      ],
      "unknownTypes": [
        "Mystery"
      ],
      "diagnostics": {
        "warnings": [
          {
            "kind": "unknownComponent",
            "id": "x",
            "componentType": "Mystery"
          }
        ]
      }
    }
    "#);
}
