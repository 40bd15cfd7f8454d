mod common;

use pixai_core::auth::SESSION_KEY;
use pixai_core::forms::{complete_login, complete_signup, submit_login, submit_signup};
use pixai_core::{
    AppConfig, ArtStyle, GenerationError, GenerationFlow, ModalId, Phase, SessionUser,
    ToastQueue,
};

#[test]
fn signup_then_auto_login_scenario() {
    let (store, mut modals) = common::fresh_page();
    let mut toasts = ToastQueue::default();

    modals.open(ModalId::Signup);
    let pending = submit_signup(&store, &mut modals, "Ann", "ann@x.com", "secret1")
        .expect("signup accepted");

    let users = store.users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Ann");
    assert_eq!(users[0].password, "secret1");

    // auto-login delay elapses
    let welcome = complete_signup(&store, &mut modals, &pending).unwrap();
    toasts.push(welcome);

    assert_eq!(
        store.current_user().unwrap(),
        Some(SessionUser {
            name: "Ann".into(),
            email: "ann@x.com".into(),
        })
    );
    assert_eq!(
        store.backend().raw(SESSION_KEY).as_deref(),
        Some(r#"{"name":"Ann","email":"ann@x.com"}"#)
    );
    assert_eq!(toasts.messages(), vec!["Welcome to PixAI, Ann!"]);
    assert!(!modals.is_open(ModalId::Signup));
}

#[test]
fn second_signup_with_same_email_fails() {
    let (store, mut modals) = common::fresh_page();
    submit_signup(&store, &mut modals, "Ann", "ann@x.com", "secret1").unwrap();
    assert!(submit_signup(&store, &mut modals, "Ann 2", "ann@x.com", "secret2").is_none());
    assert_eq!(
        modals.message(ModalId::Signup).unwrap().text,
        "User already exists with this email"
    );
    assert_eq!(store.users().unwrap().len(), 1);
}

#[test]
fn logout_then_login_again() {
    let (store, mut modals) = common::fresh_page();
    let user = submit_signup(&store, &mut modals, "Ann", "ann@x.com", "secret1").unwrap();
    complete_signup(&store, &mut modals, &user).unwrap();

    store.logout();
    assert!(store.current_user().unwrap().is_none());

    modals.open(ModalId::Login);
    let user = submit_login(&store, &mut modals, "ann@x.com", "secret1").unwrap();
    assert_eq!(complete_login(&mut modals, &user), "Great to see you, Ann!");
    assert_eq!(store.current_user().unwrap(), Some(user));
}

#[test]
fn save_without_session_asks_for_login() {
    let (store, mut modals) = common::fresh_page();
    let config = AppConfig::default();
    let mut flow = GenerationFlow::default();
    let pending = flow.begin("cat", ArtStyle::Anime).unwrap();
    flow.complete(pending, &config);

    let session = store.current_user().unwrap();
    let err = flow.save(session.as_ref()).unwrap_err();
    assert_eq!(err, GenerationError::NotLoggedIn);
    modals.open(ModalId::Login);
    assert!(modals.is_open(ModalId::Login));

    // nothing but the seeded users list was written
    assert!(store.backend().raw(SESSION_KEY).is_none());
    assert_eq!(store.users().unwrap().len(), 0);
}

#[test]
fn empty_prompt_never_builds_a_url() {
    let mut flow = GenerationFlow::default();
    assert_eq!(
        flow.begin("", ArtStyle::Realistic).unwrap_err(),
        GenerationError::EmptyPrompt
    );
    assert_eq!(flow.phase(), &Phase::Idle);
    assert_eq!(
        flow.download(chrono::Utc::now()).unwrap_err(),
        GenerationError::NoImage
    );
}
