//! End-to-end controller flows against a deterministic source

mod common;

use common::{MockAssociationSource, RecordingSink};
use semnet::{
    Explorer, ExplorerState, MemoryOverrideStore, OverrideStore, ReconcileOptions, RemoteEdge,
    Term,
};

fn dog_source() -> MockAssociationSource {
    MockAssociationSource::new()
        .respond(
            "dog",
            vec![RemoteEdge::new("animal", 0.9), RemoteEdge::new("bark", 0.5)],
        )
        .respond("animal", vec![RemoteEdge::new("dog", 0.9)])
}

fn explorer_with(source: MockAssociationSource) -> Explorer {
    Explorer::new(
        Box::new(source),
        Box::new(MemoryOverrideStore::new()),
        ReconcileOptions::default(),
    )
}

#[tokio::test]
async fn initial_exploration_builds_graph() {
    let mut explorer = explorer_with(dog_source());
    explorer.set_center(Term::new("dog"), false).await.unwrap();

    assert_eq!(explorer.center(), Some(&Term::new("dog")));
    assert_eq!(explorer.state(), ExplorerState::Idle);
    assert_eq!(explorer.history_depth(), 0);

    let graph = explorer.graph().unwrap();
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.links[0].weight, 1.8);
    assert_eq!(graph.links[1].weight, 1.0);
}

#[tokio::test]
async fn history_symmetry() {
    let mut explorer = explorer_with(dog_source());
    explorer.set_center(Term::new("dog"), false).await.unwrap();

    assert!(explorer.activate_node(Term::new("animal")).await.unwrap());
    assert_eq!(explorer.center(), Some(&Term::new("animal")));
    assert_eq!(explorer.history_depth(), 1);

    assert!(explorer.go_back().await.unwrap());
    assert_eq!(explorer.center(), Some(&Term::new("dog")));
    assert_eq!(explorer.history_depth(), 0);
}

#[tokio::test]
async fn back_on_empty_history_is_noop() {
    let mut explorer = explorer_with(dog_source());
    explorer.set_center(Term::new("dog"), false).await.unwrap();

    assert!(!explorer.go_back().await.unwrap());
    assert_eq!(explorer.center(), Some(&Term::new("dog")));
    assert_eq!(explorer.history_depth(), 0);
}

#[tokio::test]
async fn refetch_of_same_center_does_not_push_history() {
    let mut explorer = explorer_with(dog_source());
    explorer.set_center(Term::new("dog"), false).await.unwrap();
    explorer.set_center(Term::new("dog"), false).await.unwrap();
    assert_eq!(explorer.history_depth(), 0);
}

#[tokio::test]
async fn fetch_failure_preserves_displayed_state() {
    let source = dog_source().fail_on("broken");
    let mut explorer = explorer_with(source);
    explorer.set_center(Term::new("dog"), false).await.unwrap();
    let before = explorer.graph().unwrap().clone();

    let result = explorer.activate_node(Term::new("broken")).await;
    assert!(result.is_err());
    assert_eq!(explorer.state(), ExplorerState::Error);
    assert_eq!(explorer.center(), Some(&Term::new("dog")));
    assert_eq!(explorer.graph(), Some(&before));
    assert_eq!(explorer.history_depth(), 0);

    // still navigable after a failure
    assert!(explorer.activate_node(Term::new("animal")).await.unwrap());
    assert_eq!(explorer.state(), ExplorerState::Idle);
}

#[tokio::test]
async fn failed_back_navigation_keeps_history_entry() {
    let source = dog_source();
    let failing = source.failing_handle();
    let mut explorer = explorer_with(source);

    explorer.set_center(Term::new("dog"), false).await.unwrap();
    explorer.activate_node(Term::new("animal")).await.unwrap();
    assert_eq!(explorer.history_depth(), 1);

    failing.lock().unwrap().insert(Term::new("dog"));
    assert!(explorer.go_back().await.is_err());
    assert_eq!(explorer.center(), Some(&Term::new("animal")));
    assert_eq!(explorer.history_depth(), 1);

    failing.lock().unwrap().clear();
    assert!(explorer.go_back().await.unwrap());
    assert_eq!(explorer.center(), Some(&Term::new("dog")));
}

#[tokio::test]
async fn delete_hides_term_and_refetches() {
    let source = dog_source();
    let calls = source.calls_handle();
    let mut explorer = explorer_with(source);
    explorer.set_center(Term::new("dog"), false).await.unwrap();

    assert!(explorer
        .apply_delete_relation(Term::new("animal"))
        .await
        .unwrap());

    let graph = explorer.graph().unwrap();
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.links.len(), 1);
    assert_eq!(graph.links[0].target, Term::new("bark"));

    // edits re-fetch unconditionally
    assert_eq!(calls.lock().unwrap().len(), 2);
    assert_eq!(explorer.history_depth(), 0);
}

#[tokio::test]
async fn add_after_delete_restores_term() {
    let mut explorer = explorer_with(dog_source());
    explorer.set_center(Term::new("dog"), false).await.unwrap();

    explorer
        .apply_delete_relation(Term::new("animal"))
        .await
        .unwrap();
    explorer.begin_add_relation(None);
    assert!(explorer.submit_add_relation("animal").await.unwrap());

    // visible again; the remote source still surfaces it, so the remote
    // weight wins over the added-term constant
    let graph = explorer.graph().unwrap();
    let link = graph
        .links
        .iter()
        .find(|l| l.target == Term::new("animal"))
        .unwrap();
    assert_eq!(link.weight, 1.8);
    assert!(!explorer.in_add_mode());
}

#[tokio::test]
async fn added_term_unknown_to_remote_gets_added_weight() {
    let mut explorer = explorer_with(dog_source());
    explorer.set_center(Term::new("dog"), false).await.unwrap();

    explorer.begin_add_relation(None);
    explorer.submit_add_relation("leash").await.unwrap();

    let graph = explorer.graph().unwrap();
    let link = graph
        .links
        .iter()
        .find(|l| l.target == Term::new("leash"))
        .unwrap();
    assert_eq!(link.weight, 4.0);
    assert_eq!(graph.related.len(), 3);
}

#[tokio::test]
async fn blank_add_input_is_silently_ignored() {
    let source = dog_source();
    let calls = source.calls_handle();
    let mut explorer = explorer_with(source);
    explorer.set_center(Term::new("dog"), false).await.unwrap();

    explorer.begin_add_relation(None);
    assert!(!explorer.submit_add_relation("   ").await.unwrap());

    // mode stays active and nothing was fetched or stored
    assert!(explorer.in_add_mode());
    assert_eq!(calls.lock().unwrap().len(), 1);
    assert!(explorer.store().entry(&Term::new("dog")).is_empty());
}

#[tokio::test]
async fn add_mode_blocks_node_activation() {
    let mut explorer = explorer_with(dog_source());
    explorer.set_center(Term::new("dog"), false).await.unwrap();

    explorer.begin_add_relation(Some(Term::new("animal")));
    assert_eq!(explorer.add_anchor(), Some(&Term::new("animal")));
    assert!(!explorer.activate_node(Term::new("animal")).await.unwrap());
    assert_eq!(explorer.center(), Some(&Term::new("dog")));

    explorer.cancel_add_relation();
    assert!(explorer.activate_node(Term::new("animal")).await.unwrap());
}

#[tokio::test]
async fn sink_receives_every_update() {
    let sink = RecordingSink::new();
    let updates = sink.updates_handle();
    let mut explorer = explorer_with(dog_source()).with_sink(Box::new(sink));

    explorer.set_center(Term::new("dog"), false).await.unwrap();
    explorer.activate_node(Term::new("animal")).await.unwrap();
    explorer
        .apply_delete_relation(Term::new("dog"))
        .await
        .unwrap();

    let updates = updates.lock().unwrap();
    assert_eq!(updates.len(), 3);
    assert_eq!(updates[0].0, Term::new("dog"));
    assert_eq!(updates[1].0, Term::new("animal"));
    assert_eq!(updates[2].0, Term::new("animal"));
    // the delete took effect in the pushed graph
    assert!(updates[2].1.related.is_empty());
}

#[tokio::test]
async fn overrides_are_scoped_per_center() {
    let mut explorer = explorer_with(dog_source());
    explorer.set_center(Term::new("dog"), false).await.unwrap();
    explorer
        .apply_delete_relation(Term::new("animal"))
        .await
        .unwrap();

    // the suppression applies to "dog" only
    explorer.activate_node(Term::new("animal")).await.unwrap();
    let graph = explorer.graph().unwrap();
    assert!(graph.related.contains(&Term::new("dog")));
}
