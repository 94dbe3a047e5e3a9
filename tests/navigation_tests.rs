// Host-side tests for the fragment-driven controller, run over the
// in-memory document.

use modal_core::constants::*;
use modal_core::memory::{MemoryDocument, NodeId};
use modal_core::{
    DocumentHost, KeyOutcome, KeyPress, LifecycleKind, ModalConfig, ModalPhase, NavigationSync,
    RecordingPublisher, Resolution,
};

type Controller = NavigationSync<MemoryDocument, RecordingPublisher<NodeId>>;

fn controller(doc: MemoryDocument) -> Controller {
    let _ = env_logger::builder().is_test(true).try_init();
    NavigationSync::new(doc, RecordingPublisher::new(), ModalConfig::default())
}

/// Deliver queued fragment changes like the browser's `hashchange`.
fn pump(sync: &mut Controller) -> Option<Resolution> {
    let mut last = None;
    while sync.host().take_fragment_change() {
        last = Some(sync.on_fragment_change());
    }
    last
}

fn navigate(sync: &mut Controller, hash: &str) -> Option<Resolution> {
    sync.host().navigate(hash);
    pump(sync)
}

fn marked(sync: &Controller) -> Vec<NodeId> {
    sync.host().elements_with_class(ACTIVE_CLASS)
}

fn root_locked(sync: &Controller) -> bool {
    let doc = sync.host();
    modal_core::classes::has_class(doc, &doc.root_id(), OVERLAY_CLASS)
}

struct Page {
    sync: Controller,
    login: NodeId,
    signup: NodeId,
    section: NodeId,
    button: NodeId,
}

fn page() -> Page {
    let doc = MemoryDocument::new();
    let login = doc.append_modal("login", INNER_CLASS);
    let signup = doc.append_modal("signup", INNER_CLASS);
    let section = doc.append_element(doc.root_id(), Some("section"), "content");
    doc.append_element(section, None, "prose");
    let button = doc.append_element(doc.root_id(), Some("open-login"), "btn");
    doc.focus(&button);
    Page {
        sync: controller(doc),
        login,
        signup,
        section,
        button,
    }
}

#[test]
fn scenario_a_fragment_selects_modal() {
    let mut p = page();

    let res = navigate(&mut p.sync, "#login");

    assert_eq!(res, Some(Resolution::Activated("login".into())));
    assert_eq!(marked(&p.sync), vec![p.login]);
    assert!(root_locked(&p.sync));
    let events = p.sync.publisher().events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, LifecycleKind::Show);
    assert_eq!(events[0].target, p.login);
    assert_eq!(p.sync.active_id().as_deref(), Some("login"));
    assert_eq!(p.sync.host().focused(), Some(p.login));
}

#[test]
fn scenario_b_empty_fragment_hides_modal() {
    let mut p = page();
    navigate(&mut p.sync, "#login");

    let res = navigate(&mut p.sync, "");

    assert_eq!(res, Some(Resolution::Cleared));
    assert!(marked(&p.sync).is_empty());
    assert!(!root_locked(&p.sync));
    assert_eq!(
        p.sync.publisher().kinds(),
        vec![LifecycleKind::Show, LifecycleKind::Hide]
    );
    assert_eq!(p.sync.publisher().events()[1].target, p.login);
    assert_eq!(p.sync.phase(), ModalPhase::Idle);
    assert_eq!(p.sync.host().focused(), Some(p.button));
}

#[test]
fn scenario_c_unknown_id_behaves_like_empty_fragment() {
    let mut p = page();
    navigate(&mut p.sync, "#login");

    let res = navigate(&mut p.sync, "#does-not-exist");

    assert_eq!(res, Some(Resolution::Cleared));
    assert!(marked(&p.sync).is_empty());
    assert!(!root_locked(&p.sync));
    assert_eq!(
        p.sync.publisher().kinds(),
        vec![LifecycleKind::Show, LifecycleKind::Hide]
    );
}

#[test]
fn scenario_d_escape_dismisses_and_restores_focus() {
    let mut p = page();
    navigate(&mut p.sync, "#login");
    assert_eq!(p.sync.host().focused(), Some(p.login));

    let outcome = p.sync.on_key_up(&KeyPress::escape());

    assert!(outcome.dismissed);
    assert!(!outcome.prevent_default);
    assert_eq!(p.sync.current_fragment(), SENTINEL_FRAGMENT);
    assert_eq!(p.sync.host().focused(), Some(p.button));

    assert_eq!(pump(&mut p.sync), Some(Resolution::Cleared));
    assert!(marked(&p.sync).is_empty());
    assert!(!root_locked(&p.sync));
    assert_eq!(
        p.sync.publisher().kinds(),
        vec![LifecycleKind::Show, LifecycleKind::Hide]
    );
    assert_eq!(p.sync.host().focused(), Some(p.button));
}

#[test]
fn scenario_e_non_modal_target_changes_nothing() {
    let mut p = page();
    navigate(&mut p.sync, "#login");
    let login_class = p.sync.host().class_of(p.login);

    let res = navigate(&mut p.sync, "#section");

    assert_eq!(res, Some(Resolution::Ignored("section".into())));
    assert_eq!(marked(&p.sync), vec![p.login]);
    assert_eq!(p.sync.host().class_of(p.login), login_class);
    assert_eq!(p.sync.host().class_of(p.section), "content");
    assert!(root_locked(&p.sync));
    assert_eq!(p.sync.publisher().len(), 1);
}

#[test]
fn scenario_e_element_without_children_is_ignored() {
    let mut p = page();
    let res = navigate(&mut p.sync, "#open-login");
    assert_eq!(res, Some(Resolution::Ignored("open-login".into())));
    assert!(marked(&p.sync).is_empty());
    assert!(!root_locked(&p.sync));
    assert!(p.sync.publisher().is_empty());
}

#[test]
fn renavigating_to_active_modal_refires_hide_then_show() {
    let mut p = page();
    p.sync.resolve("#login");
    let res = p.sync.resolve("#login");

    assert_eq!(res, Resolution::Activated("login".into()));
    assert_eq!(marked(&p.sync), vec![p.login]);
    let events = p.sync.publisher().events();
    assert_eq!(
        events.iter().map(|e| e.kind).collect::<Vec<_>>(),
        vec![LifecycleKind::Show, LifecycleKind::Hide, LifecycleKind::Show]
    );
    assert!(events.iter().all(|e| e.target == p.login));
    // the hide restored focus to the button, the second show captured it again
    assert_eq!(p.sync.tracker().last_focused(), Some(&p.button));
    assert_eq!(p.sync.host().focused(), Some(p.login));
}

#[test]
fn switching_modals_hides_before_showing() {
    let mut p = page();
    navigate(&mut p.sync, "#login");
    navigate(&mut p.sync, "#signup");

    assert_eq!(marked(&p.sync), vec![p.signup]);
    assert!(root_locked(&p.sync));
    let events = p.sync.publisher().events();
    assert_eq!(events.len(), 3);
    assert_eq!((events[1].kind, events[1].target), (LifecycleKind::Hide, p.login));
    assert_eq!((events[2].kind, events[2].target), (LifecycleKind::Show, p.signup));
}

#[test]
fn at_most_one_modal_marked_across_navigation() {
    let mut p = page();
    for hash in [
        "#login", "#signup", "#section", "#login", "#!", "#signup", "#nope", "", "#login",
    ] {
        navigate(&mut p.sync, hash);
        assert!(marked(&p.sync).len() <= 1, "two modals marked after {hash}");
        assert_eq!(root_locked(&p.sync), !marked(&p.sync).is_empty());
    }
}

#[test]
fn sentinel_wins_over_element_with_that_id() {
    let doc = MemoryDocument::new();
    doc.append_modal("!", INNER_CLASS);
    let mut sync = controller(doc);
    assert_eq!(sync.resolve("#!"), Resolution::Cleared);
    assert!(marked(&sync).is_empty());
}

#[test]
fn first_element_child_skips_text_nodes() {
    let doc = MemoryDocument::new();
    let modal = doc.append_element(doc.root_id(), Some("terms"), "modal");
    doc.append_text(modal);
    doc.append_element(modal, None, INNER_CLASS);
    let mut sync = controller(doc);
    assert_eq!(sync.resolve("terms"), Resolution::Activated("terms".into()));
}

#[test]
fn lookalike_inner_class_is_not_a_modal() {
    let doc = MemoryDocument::new();
    let el = doc.append_element(doc.root_id(), Some("card"), "card");
    doc.append_element(el, None, "modal-inner-wrap");
    let mut sync = controller(doc);
    assert_eq!(sync.resolve("card"), Resolution::Ignored("card".into()));
}

#[test]
fn load_resolves_the_initial_fragment() {
    let doc = MemoryDocument::new();
    let login = doc.append_modal("login", INNER_CLASS);
    doc.navigate("#login");
    let mut sync = controller(doc);

    assert_eq!(sync.on_load(), Resolution::Activated("login".into()));
    assert_eq!(marked(&sync), vec![login]);
}

#[test]
fn load_without_fragment_is_a_quiet_clear() {
    let mut p = page();
    assert_eq!(p.sync.on_load(), Resolution::Cleared);
    assert!(p.sync.publisher().is_empty());
    assert!(!root_locked(&p.sync));
}

#[test]
fn escape_without_prior_focus_asks_to_prevent_default() {
    let doc = MemoryDocument::new();
    doc.append_modal("login", INNER_CLASS);
    let mut sync = controller(doc);
    navigate(&mut sync, "#login");
    assert!(sync.tracker().last_focused().is_none());

    let outcome = sync.on_key_up(&KeyPress::escape());

    assert!(outcome.dismissed);
    assert!(outcome.prevent_default);
    assert_eq!(pump(&mut sync), Some(Resolution::Cleared));
}

#[test]
fn escape_on_sentinel_fragment_is_ignored() {
    let mut p = page();
    navigate(&mut p.sync, "#!");
    let outcome = p.sync.on_key_up(&KeyPress::escape());
    assert_eq!(outcome, KeyOutcome::default());
    assert!(!p.sync.host().take_fragment_change());
}

#[test]
fn escape_without_fragment_is_ignored() {
    let mut p = page();
    assert_eq!(p.sync.current_fragment(), "");
    let outcome = p.sync.on_key_up(&KeyPress::escape());
    assert_eq!(outcome, KeyOutcome::default());
    assert!(!p.sync.host().take_fragment_change());
    assert_eq!(p.sync.current_fragment(), "");
}

#[test]
fn double_hash_names_an_id_starting_with_hash() {
    let mut p = page();
    navigate(&mut p.sync, "#login");

    let res = navigate(&mut p.sync, "##login");

    assert_eq!(p.sync.current_fragment(), "#login");
    assert_eq!(res, Some(Resolution::Cleared));
    assert!(marked(&p.sync).is_empty());
    assert!(!root_locked(&p.sync));
}

#[test]
fn double_hash_bang_is_not_the_sentinel() {
    let mut p = page();
    navigate(&mut p.sync, "#login");
    p.sync.host().navigate("##!");

    // escape and resolve agree: "#!" is an ordinary (unknown) id
    let outcome = p.sync.on_key_up(&KeyPress::escape());
    assert!(outcome.dismissed);
    assert_eq!(p.sync.resolve("##!"), Resolution::Cleared);
    assert_eq!(p.sync.current_fragment(), SENTINEL_FRAGMENT);
}

#[test]
fn other_keys_are_ignored() {
    let mut p = page();
    navigate(&mut p.sync, "#login");
    let outcome = p.sync.on_key_up(&KeyPress::new("Enter", 13));
    assert!(!outcome.dismissed);
    assert_eq!(p.sync.current_fragment(), "login");
    assert_eq!(marked(&p.sync), vec![p.login]);
}

#[test]
fn open_and_close_route_through_the_fragment() {
    let mut p = page();

    p.sync.open("signup");
    assert_eq!(p.sync.current_fragment(), "signup");
    assert_eq!(pump(&mut p.sync), Some(Resolution::Activated("signup".into())));
    assert_eq!(p.sync.active_id().as_deref(), Some("signup"));

    p.sync.close();
    assert_eq!(p.sync.current_fragment(), SENTINEL_FRAGMENT);
    assert_eq!(pump(&mut p.sync), Some(Resolution::Cleared));
    assert_eq!(p.sync.active_id(), None);
}

#[test]
fn custom_config_drives_classes_and_sentinel() {
    let doc = MemoryDocument::new();
    let login = doc.append_modal("login", "dialog");
    let config = ModalConfig::default()
        .with_active_class("open")
        .with_overlay_class("no-scroll")
        .with_inner_class("dialog")
        .with_sentinel("closed");
    let mut sync = NavigationSync::new(doc, RecordingPublisher::<NodeId>::new(), config);

    sync.host().navigate("#login");
    assert_eq!(sync.on_fragment_change(), Resolution::Activated("login".into()));
    assert_eq!(sync.host().class_of(login), "modal open");
    assert_eq!(sync.host().class_of(sync.host().root_id()), " no-scroll");

    let outcome = sync.on_key_up(&KeyPress::escape());
    assert!(outcome.dismissed);
    assert_eq!(sync.current_fragment(), "closed");
    assert_eq!(sync.on_fragment_change(), Resolution::Cleared);
    assert_eq!(sync.host().class_of(login), "modal");
    assert_eq!(sync.host().class_of(sync.host().root_id()), "");
}
