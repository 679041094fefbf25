//! Behaviour-driven step definitions driving the recommend CLI scenarios.

use super::helpers::{QUEUE_TIMES_JSON, REQUEST_JSON, Workspace, write_utf8};
use super::*;
use crate::recommend::WaitTimeProviderBuilder;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use std::sync::{Arc, Mutex};
use thrillcompass_core::{Recommendation, WaitTimeError, WaitTimeProvider, WaitTimeSnapshot};
use thrillcompass_data::parse_queue_times;

struct RecommendWorld {
    workspace: Workspace,
    include_request: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    feed: RefCell<Option<Result<WaitTimeSnapshot, WaitTimeError>>>,
    base_urls: RefCell<Vec<String>>,
    parks_queried: Arc<Mutex<Vec<u64>>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            include_request: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            feed: RefCell::new(None),
            base_urls: RefCell::new(Vec::new()),
            parks_queried: Arc::new(Mutex::new(Vec::new())),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["thrillcompass".to_owned(), "recommend".to_owned()];
        if *self.include_request.borrow() {
            argv.push(self.workspace.path("request.json").into_string());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn recommend_world() -> RecommendWorld {
    RecommendWorld::new()
}

/// Live provider returning a canned response and recording requested parks.
struct RecordingProvider {
    response: Result<WaitTimeSnapshot, WaitTimeError>,
    parks_queried: Arc<Mutex<Vec<u64>>>,
}

impl WaitTimeProvider for RecordingProvider {
    fn fetch_snapshot(&self, park_id: u64) -> Result<WaitTimeSnapshot, WaitTimeError> {
        self.parks_queried
            .lock()
            .expect("parks lock")
            .push(park_id);
        self.response.clone()
    }
}

struct StubWaitTimeProviderBuilder<'a> {
    world: &'a RecommendWorld,
}

impl WaitTimeProviderBuilder for StubWaitTimeProviderBuilder<'_> {
    fn build(&self, base_url: &str) -> Result<Box<dyn WaitTimeProvider>, CliError> {
        self.world.base_urls.borrow_mut().push(base_url.to_owned());
        let response = self
            .world
            .feed
            .borrow()
            .clone()
            .expect("live feed configured for this scenario");
        Ok(Box::new(RecordingProvider {
            response,
            parks_queried: Arc::clone(&self.world.parks_queried),
        }))
    }
}

#[given("a recommendation request exists on disk")]
fn request_exists(#[from(recommend_world)] world: &RecommendWorld) {
    world.workspace.write("request.json", REQUEST_JSON);
}

#[given("the recommendation request contains invalid JSON")]
fn request_contains_invalid_json(#[from(recommend_world)] world: &RecommendWorld) {
    write_utf8(&world.workspace.path("request.json"), b"{ not valid json");
}

#[given("I omit the recommendation request path")]
fn omit_request_path(#[from(recommend_world)] world: &RecommendWorld) {
    *world.include_request.borrow_mut() = false;
}

#[given("a saved wait-time snapshot exists on disk")]
fn saved_snapshot_exists(#[from(recommend_world)] world: &RecommendWorld) {
    let path = world.workspace.write("queue_times.json", QUEUE_TIMES_JSON);
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_SNAPSHOT}"), path.into_string()]);
}

#[given("the live feed reports the park's wait times")]
fn live_feed_reports(#[from(recommend_world)] world: &RecommendWorld) {
    let snapshot = parse_queue_times(QUEUE_TIMES_JSON.as_bytes()).expect("fixture decodes");
    world.feed.replace(Some(Ok(snapshot)));
}

#[given("the live feed is unreachable")]
fn live_feed_unreachable(#[from(recommend_world)] world: &RecommendWorld) {
    world.feed.replace(Some(Err(WaitTimeError::Network {
        url: "https://queue-times.com/parks/64/queue_times.json".to_owned(),
        message: "connection refused".to_owned(),
    })));
}

#[given("I choose park {park:u64}")]
fn choose_park(#[from(recommend_world)] world: &RecommendWorld, park: u64) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_PARK_ID}"), park.to_string()]);
}

#[when("I run the recommend command")]
fn run_recommend_command(#[from(recommend_world)] world: &RecommendWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Recommend(args) => {
            let builder = StubWaitTimeProviderBuilder { world };
            let mut buffer = world.stdout.borrow_mut();
            run_recommend_with(args, &builder, &mut *buffer)
        }
        Command::Parks(_) => panic!("expected recommend command"),
    });

    world.result.replace(Some(outcome));
}

#[then("the recommendation succeeds")]
fn recommendation_succeeds(#[from(recommend_world)] world: &RecommendWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }
}

#[then("ride {best:u64} is recommended with ride {runner_up:u64} as runner-up")]
fn ride_is_recommended(
    #[from(recommend_world)] world: &RecommendWorld,
    best: u64,
    runner_up: u64,
) {
    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    let recommendation: Recommendation =
        serde_json::from_str(&stdout).expect("output should be a JSON recommendation");
    let best_id = recommendation.best.map(|scored| scored.candidate.id);
    let runner_up_id = recommendation.runner_up.map(|scored| scored.candidate.id);
    assert_eq!(best_id, Some(best));
    assert_eq!(runner_up_id, Some(runner_up));
}

#[then("the live feed was queried for park {park:u64}")]
fn live_feed_queried(#[from(recommend_world)] world: &RecommendWorld, park: u64) {
    let parks = world.parks_queried.lock().expect("parks lock");
    assert_eq!(*parks, vec![park]);
    assert_eq!(*world.base_urls.borrow(), vec!["https://queue-times.com".to_owned()]);
}

#[then("the command fails because the wait times could not be fetched")]
fn command_fails_fetch(#[from(recommend_world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::FetchWaitTimes { park_id, source } => {
            assert_eq!(*park_id, DEFAULT_PARK_ID);
            assert!(matches!(source, WaitTimeError::Network { .. }));
        }
        other => panic!("expected FetchWaitTimes, found {other:?}"),
    }
}

#[then("the command fails because the recommendation request path is missing")]
fn command_fails_missing_request(#[from(recommend_world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_REQUEST),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the recommendation request JSON is invalid")]
fn command_fails_invalid_json(#[from(recommend_world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::ParseRequest { .. } => {}
        other => panic!("expected ParseRequest, found {other:?}"),
    }
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recommend_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(recommend_world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(recommend_from_snapshot, "recommending from a saved snapshot");
register_recommend_scenario!(recommend_from_live_feed, "recommending from the live feed");
register_recommend_scenario!(recommend_chosen_park, "recommending for a chosen park");
register_recommend_scenario!(recommend_feed_failure, "reporting live feed failures");
register_recommend_scenario!(recommend_missing_request, "rejecting missing request paths");
register_recommend_scenario!(recommend_invalid_json, "rejecting invalid request JSON");
