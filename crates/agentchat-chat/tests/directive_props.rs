use agentchat_chat::DirectiveScanner;
use agentchat_toolcore::{ToolContext, ToolRegistry};
use agentchat_tools::register_default_tools;
use proptest::prelude::*;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread().build().unwrap()
}

proptest! {
    #[test]
    fn prop_reply_without_directive_is_returned_unchanged(reply in "\\PC*") {
        prop_assume!(!reply.contains("TOOL_CALL["));

        let mut registry = ToolRegistry::quiet();
        register_default_tools(&mut registry);
        let context = ToolContext::new(std::env::temp_dir(), "prop".to_string());
        let scanner = DirectiveScanner::new().unwrap();

        let processed = runtime().block_on(scanner.process(&reply, &registry, &context));
        prop_assert_eq!(processed, reply);
    }

    #[test]
    fn prop_single_directive_is_substituted(prompt in "[a-z ]{1,20}") {
        let mut registry = ToolRegistry::quiet();
        register_default_tools(&mut registry);
        let context = ToolContext::new(std::env::temp_dir(), "prop".to_string());
        let scanner = DirectiveScanner::new().unwrap();

        let reply = format!("before TOOL_CALL[image:action=edit,prompt={}] after", prompt);
        let processed = runtime().block_on(scanner.process(&reply, &registry, &context));

        prop_assert!(!processed.contains("TOOL_CALL["));
        let expected = format!("Edited image with prompt: '{}'", prompt.trim());
        prop_assert!(processed.contains(&expected));
    }
}
