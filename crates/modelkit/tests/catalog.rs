//! Exhaustive resolution table for the whole catalog, one case per member.
//!
//! These strings are a compatibility contract with the OpenAI API; a failing
//! case here means a wire-breaking change, not a refactoring opportunity.

use modelkit::{
    ChatModel, CodeModel, CompletionModel, EditModel, EmbeddingModel, Model, ModerationModel,
};
use rstest::rstest;

#[rstest]
// chat
#[case(ChatModel::Gpt4.into(), "gpt-4")]
#[case(ChatModel::Gpt4_0613.into(), "gpt-4-0613")]
#[case(ChatModel::Gpt4_32k.into(), "gpt-4-32k")]
#[case(ChatModel::Gpt4_32k0613.into(), "gpt-4-32k-0613")]
#[case(ChatModel::Gpt4_0314.into(), "gpt-4-0314")]
#[case(ChatModel::Gpt4_32k0314.into(), "gpt-4-32k-0314")]
#[case(ChatModel::Gpt35Turbo.into(), "gpt-3.5-turbo")]
#[case(ChatModel::Gpt35Turbo16k.into(), "gpt-3.5-turbo-16k")]
#[case(ChatModel::Gpt35Turbo0613.into(), "gpt-3.5-turbo-0613")]
#[case(ChatModel::Gpt35Turbo16k0613.into(), "gpt-3.5-turbo-16k-0613")]
#[case(ChatModel::Gpt35Turbo0301.into(), "gpt-3.5-turbo-0301")]
// completion
#[case(CompletionModel::TextDavinci003.into(), "text-davinci-003")]
#[case(CompletionModel::TextDavinci002.into(), "text-davinci-002")]
#[case(CompletionModel::TextCurie001.into(), "text-curie-001")]
#[case(CompletionModel::TextBabbage001.into(), "text-babbage-001")]
#[case(CompletionModel::TextAda001.into(), "text-ada-001")]
#[case(CompletionModel::Davinci002.into(), "davinci-002")]
#[case(CompletionModel::Babbage002.into(), "babbage-002")]
#[case(CompletionModel::Davinci.into(), "davinci")]
#[case(CompletionModel::Curie.into(), "curie")]
#[case(CompletionModel::Babbage.into(), "babbage")]
#[case(CompletionModel::Ada.into(), "ada")]
// code
#[case(CodeModel::CodeDavinci002.into(), "code-davinci-002")]
#[case(CodeModel::CodeCushman001.into(), "code-cushman-001")]
// edit
#[case(EditModel::TextDavinciEdit001.into(), "text-davinci-edit-001")]
#[case(EditModel::CodeDavinciEdit001.into(), "code-davinci-edit-001")]
// embedding
#[case(EmbeddingModel::TextEmbeddingAda002.into(), "text-embedding-ada-002")]
#[case(EmbeddingModel::TextSearchAdaDoc001.into(), "text-search-ada-doc-001")]
// moderation
#[case(ModerationModel::Stable.into(), "text-moderation-stable")]
#[case(ModerationModel::Latest.into(), "text-moderation-latest")]
fn every_member_resolves_to_its_documented_identifier(
    #[case] model: Model,
    #[case] expected: &str,
) {
    assert_eq!(model.id(), expected);
}

/// Walks every family table so a member added without a case above still
/// gets its basic guarantees checked.
fn whole_catalog() -> Vec<Model> {
    let mut catalog: Vec<Model> = Vec::new();
    catalog.extend(ChatModel::ALL.iter().copied().map(Model::from));
    catalog.extend(CompletionModel::ALL.iter().copied().map(Model::from));
    catalog.extend(CodeModel::ALL.iter().copied().map(Model::from));
    catalog.extend(EditModel::ALL.iter().copied().map(Model::from));
    catalog.extend(EmbeddingModel::ALL.iter().copied().map(Model::from));
    catalog.extend(ModerationModel::ALL.iter().copied().map(Model::from));
    catalog
}

#[test]
fn resolution_is_deterministic() {
    for model in whole_catalog() {
        assert_eq!(model.id(), model.id());
    }
}

#[test]
fn every_member_round_trips_through_from_id() {
    // Holds as long as no identifier is shared across families; if a
    // transitional duplicate ever appears, from_id documents that the
    // earlier family wins and this test must carve out that member.
    for model in whole_catalog() {
        assert_eq!(Model::from_id(model.id()), model);
    }
}

#[test]
fn selectors_fill_the_model_field_of_a_request_body() {
    let body = serde_json::json!({
        "model": Model::from(ChatModel::Gpt35Turbo16k),
        "messages": [{ "role": "user", "content": "ping" }],
    });
    assert_eq!(body["model"], "gpt-3.5-turbo-16k");

    let parsed: Model = serde_json::from_value(body["model"].clone()).unwrap();
    assert_eq!(parsed, Model::Chat(ChatModel::Gpt35Turbo16k));
}
