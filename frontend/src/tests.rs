use pretty_assertions::assert_eq;
use yew_router::Routable;

use std::rc::Rc;

use crate::api::client::csrf_token_from_cookies;
use crate::api::events::upcoming_games_key;
use crate::api::game_logs::game_log_key;
use crate::api::join_url;
use crate::api::players::{player_stats_path, search_key};
use crate::components::player_search::is_searchable;
use crate::components::upcoming_games::format_kickoff;
use crate::pages::login::form_error;
use crate::auth::{session_action, AuthAction, AuthState};
use crate::hooks::cached_query::settle;
use crate::Route;
use shared::cache::QueryKey;
use shared::dto::auth::{RegisterRequest, UserDto};
use shared::view::filters::FilterSet;
use shared::view::latest::LatestRequest;
use shared::FetchError;
use yew::functional::Reducible;

#[test]
fn csrf_token_is_read_from_cookie_string() {
    assert_eq!(
        csrf_token_from_cookies("sessionid=abc; csrftoken=tok%3D1; theme=dark"),
        Some("tok=1".to_string())
    );
    assert_eq!(csrf_token_from_cookies("sessionid=abc"), None);
    assert_eq!(csrf_token_from_cookies("csrftoken="), None);
    assert_eq!(csrf_token_from_cookies(""), None);
}

#[test]
fn join_url_keeps_paths_relative_without_base() {
    assert_eq!(join_url("", "/nfl/teams/"), "/nfl/teams/");
    assert_eq!(
        join_url("https://api.example.com", "/nfl/teams/"),
        "https://api.example.com/nfl/teams/"
    );
}

#[test]
fn routes_round_trip_through_paths() {
    let player = Route::Player { id: 31, slug: "josh-allen".to_string() };
    assert_eq!(player.to_path(), "/player/31/josh-allen");
    assert_eq!(Route::recognize("/player/31/josh-allen"), Some(player));
    assert_eq!(Route::recognize("/team-stats"), Some(Route::TeamStats));
    assert_eq!(Route::Home.to_path(), "/");
}

#[test]
fn game_log_key_sends_filters_and_page() {
    let filters =
        FilterSet::from_pairs([("position", "RB"), ("opponent", "KC"), ("location", "all")]);
    assert_eq!(
        game_log_key(&filters, 3).to_string(),
        "/nfl/player/stats/gamelogs?location=all&opponent=KC&position=RB&page=3"
    );
}

#[test]
fn player_endpoints() {
    assert_eq!(player_stats_path(31, "josh-allen"), "/nfl/player/stats/id/31/josh-allen");
    assert_eq!(search_key(" Josh ").to_string(), "/nfl/players/?fullName=Josh");
    assert_eq!(upcoming_games_key().to_string(), "/nfl/events/?status=STATUS_SCHEDULED");
}

#[test]
fn kickoff_falls_back_to_raw_date() {
    assert_eq!(format_kickoff("09-08"), "09-08");
}

#[test]
fn form_errors_show_the_validation_message() {
    let request = RegisterRequest {
        username: "fan".into(),
        email: "fan@example.com".into(),
        password1: "gridiron-2024".into(),
        password2: "gridiron-2025".into(),
    };
    let err = request.validate_form().unwrap_err();
    assert_eq!(form_error(err), "Passwords do not match");
}

fn fan() -> UserDto {
    UserDto {
        id: Some(7),
        username: "fan".into(),
        email: "fan@example.com".into(),
    }
}

#[test]
fn session_check_outcomes_map_to_auth_actions() {
    assert_eq!(session_action(Ok(Some(fan()))), AuthAction::SignedIn(fan()));
    assert_eq!(session_action(Ok(None)), AuthAction::SessionExpired);
    assert_eq!(
        session_action(Err(FetchError::from_status(500, "boom"))),
        AuthAction::SetError(Some("boom".to_string()))
    );
    assert_eq!(
        session_action(Err(FetchError::Network("offline".into()))),
        AuthAction::SetError(Some("Could not reach the server".to_string()))
    );
}

#[test]
fn failed_session_check_keeps_user_and_shows_error() {
    let state = Rc::new(AuthState {
        user: Some(fan()),
        refresh_active: true,
        ..Default::default()
    });
    let next = state.reduce(AuthAction::SetError(Some("Could not reach the server".into())));

    assert_eq!(next.user, Some(fan()));
    assert!(next.refresh_active);
    assert_eq!(next.error.as_deref(), Some("Could not reach the server"));
}

#[test]
fn cached_query_drops_response_for_superseded_key() {
    let latest = LatestRequest::new();
    let josh_key = QueryKey::new("/nfl/players/", "fullName=Josh");
    let justin_key = QueryKey::new("/nfl/players/", "fullName=Justin");
    let josh = latest.issue();
    let justin = latest.issue();

    // The Josh request finishes last but its key is no longer shown.
    assert!(settle(&latest, justin, &justin_key, Ok("justin"), None).is_some());
    assert!(settle(&latest, josh, &josh_key, Ok("josh"), None).is_none());
}

#[test]
fn cached_query_keeps_shown_data_on_failure() {
    let latest = LatestRequest::new();
    let key = QueryKey::endpoint("/nfl/teams/stats/");
    let ticket = latest.issue();
    let shown = Some(Rc::new("cached"));

    let state = settle(&latest, ticket, &key, Err(FetchError::from_status(502, "")), shown)
        .unwrap();
    assert_eq!(state.data.as_deref(), Some(&"cached"));
    assert_eq!(state.error.as_deref(), Some("Request failed (HTTP 502)"));
    assert!(!state.loading);
}

#[test]
fn cached_query_drops_response_after_unmount() {
    let latest = LatestRequest::new();
    let key = QueryKey::endpoint("/nfl/events/");
    let ticket = latest.issue();
    latest.cancel();
    assert!(settle(&latest, ticket, &key, Ok(1), None).is_none());
}

#[test]
fn search_needs_two_characters() {
    assert!(!is_searchable(""));
    assert!(!is_searchable(" J "));
    assert!(is_searchable("Jo"));
    assert!(is_searchable(" Josh "));
}
