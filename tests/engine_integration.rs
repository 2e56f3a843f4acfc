//! Cross-component integration tests
//!
//! These tests exercise the public surface: the substitution engine and the
//! template store working together, plus shared use of a processor across
//! threads.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;

use ara_template_engine::{
    create_template_store, Template, TemplateError, TemplateProcessor, TemplateStore,
};

fn values(pairs: &[(&str, &str)]) -> Arc<HashMap<String, String>> {
    Arc::new(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

// =============================================================================
// Processor Integration Tests
// =============================================================================

mod processor_tests {
    use super::*;

    #[test]
    fn test_processor_shared_across_threads() {
        let processor = TemplateProcessor::new(values(&[("n", "42")]));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let p = processor.clone();
                std::thread::spawn(move || p.process_template("value ${n}").unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "value 42");
        }
    }

    #[test]
    fn test_processor_renders_notification_payload() {
        let processor = TemplateProcessor::from_json(&json!({
            "order_id": "ORD-123",
            "carrier": "FedEx"
        }))
        .unwrap();

        let payload = json!({
            "title": "Order ${order_id} shipped",
            "body": "Your order ${order_id} is being delivered by ${carrier}",
            "meta": { "attempts": 1 }
        });

        let rendered = processor.process_value(&payload).unwrap();
        assert_eq!(rendered["title"], "Order ORD-123 shipped");
        assert_eq!(
            rendered["body"],
            "Your order ORD-123 is being delivered by FedEx"
        );
        assert_eq!(rendered["meta"]["attempts"], 1);
    }

    #[test]
    fn test_escape_survives_full_pipeline() {
        let processor = TemplateProcessor::new(values(&[("country", "Spain")]));

        let out = processor
            .process_template("literal ${${country}} stays wrapped")
            .unwrap();
        assert_eq!(out, "literal ${Spain} stays wrapped");
    }
}

// =============================================================================
// Template Store Integration Tests
// =============================================================================

mod store_tests {
    use super::*;

    #[test]
    fn test_store_create_and_render() {
        let store = TemplateStore::new();

        let template = Template::new(
            "order-shipped".to_string(),
            "Order Shipped".to_string(),
            "Order ${order_id} is on its way via ${carrier}".to_string(),
        );

        store.create(template).unwrap();

        let retrieved = store.get("order-shipped").unwrap();
        assert_eq!(retrieved.name, "Order Shipped");

        let rendered = store
            .render(
                "order-shipped",
                &json!({ "order_id": "ORD-123", "carrier": "FedEx" }),
            )
            .unwrap();
        assert_eq!(rendered, "Order ORD-123 is on its way via FedEx");
    }

    #[test]
    fn test_store_is_shareable() {
        let store = create_template_store();

        let template = Template::new(
            "greeting".to_string(),
            "Greeting".to_string(),
            "Hello ${name}".to_string(),
        );
        store.create(template).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let s = Arc::clone(&store);
                std::thread::spawn(move || {
                    s.render("greeting", &json!({ "name": format!("user-{}", i) }))
                        .unwrap()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("Hello user-{}", i));
        }
    }

    #[test]
    fn test_store_render_missing_template() {
        let store = TemplateStore::new();
        assert!(matches!(
            store.render("absent", &json!({})),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_store_render_rejects_non_object_variables() {
        let store = TemplateStore::new();

        let template = Template::new(
            "greeting".to_string(),
            "Greeting".to_string(),
            "Hello ${name}".to_string(),
        );
        store.create(template).unwrap();

        assert!(matches!(
            store.render("greeting", &serde_json::Value::Null),
            Err(TemplateError::InvalidArgument(_))
        ));
    }
}
