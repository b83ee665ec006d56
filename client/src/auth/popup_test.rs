use super::*;

#[test]
fn authorize_url_encodes_parameters() {
    let url = authorize_url("client.apps", "https://shop.example/auth/popup-callback", "n1");
    assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?client_id=client.apps&"));
    assert!(url.contains("redirect_uri=https%3A%2F%2Fshop.example%2Fauth%2Fpopup-callback"));
    assert!(url.contains("response_type=id_token"));
    assert!(url.contains("scope=openid%20email%20profile"));
    assert!(url.contains("nonce=n1"));
}

#[test]
fn fragment_with_token_parses() {
    assert_eq!(
        parse_callback_fragment("#state=x&id_token=eyJ.abc.def&authuser=0"),
        Some(PopupResult::IdToken("eyJ.abc.def".to_owned()))
    );
}

#[test]
fn fragment_with_error_parses() {
    assert_eq!(
        parse_callback_fragment("#error=access_denied"),
        Some(PopupResult::Denied("access_denied".to_owned()))
    );
}

#[test]
fn fragment_values_are_percent_decoded() {
    assert_eq!(
        parse_callback_fragment("error=interaction%5Frequired"),
        Some(PopupResult::Denied("interaction_required".to_owned()))
    );
}

#[test]
fn empty_or_unrelated_fragment_yields_nothing() {
    assert_eq!(parse_callback_fragment(""), None);
    assert_eq!(parse_callback_fragment("#"), None);
    assert_eq!(parse_callback_fragment("#id_token=&state=1"), None);
}

#[test]
fn newer_ticket_supersedes_older() {
    let tickets = PopupTickets::default();
    let first = tickets.issue();
    assert!(tickets.is_current(first));
    let second = tickets.clone().issue();
    assert!(!tickets.is_current(first));
    assert!(tickets.is_current(second));
}
