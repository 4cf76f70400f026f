pub mod client;
pub mod error;

pub use error::FetchError;

use std::future::Future;
use web_sys::{AbortController, AbortSignal};
use yew::prelude::*;

/// The render state of one fetch-backed widget.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Error(String),
    Empty,
    Ready(T),
}

/// Lets a payload declare that it holds nothing worth rendering.
pub trait Payload {
    fn has_content(&self) -> bool {
        true
    }
}

impl<T> Payload for Vec<T> {
    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Payload> FetchState<T> {
    /// Converts a finished request into the next state. Returns `None` for
    /// aborted requests, which must leave the current state untouched.
    pub fn from_result(result: Result<T, FetchError>) -> Option<Self> {
        match result {
            Ok(data) if data.has_content() => Some(FetchState::Ready(data)),
            Ok(_) => Some(FetchState::Empty),
            Err(FetchError::Aborted) => None,
            Err(err) => Some(FetchState::Error(err.user_message())),
        }
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Generation counter handing out one token per request. Only the token of
/// the latest request is current, so a superseded or cancelled request can
/// never commit its result.
#[derive(Debug, Default)]
pub struct RequestTracker {
    generation: u64,
}

impl RequestTracker {
    pub fn begin(&mut self) -> RequestToken {
        self.generation = self.generation.wrapping_add(1);
        RequestToken(self.generation)
    }

    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.generation == token.0
    }
}

/// Allows one request at a time. Starting is refused while a request runs;
/// only the running request's token can finish it.
#[derive(Debug, Default)]
pub struct SingleFlight {
    tracker: RequestTracker,
    running: Option<RequestToken>,
}

impl SingleFlight {
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn try_begin(&mut self) -> Option<RequestToken> {
        if self.running.is_some() {
            return None;
        }
        let token = self.tracker.begin();
        self.running = Some(token);
        Some(token)
    }

    /// Returns `false` for a cancelled or stale token, whose result must be
    /// dropped.
    pub fn finish(&mut self, token: RequestToken) -> bool {
        if self.running != Some(token) || !self.tracker.is_current(token) {
            return false;
        }
        self.running = None;
        true
    }

    pub fn cancel(&mut self) {
        self.tracker.cancel();
        self.running = None;
    }
}

/// Owns the browser `AbortController` of one request.
pub struct AbortHandle {
    controller: Option<AbortController>,
}

impl AbortHandle {
    pub fn new() -> Self {
        let controller = AbortController::new()
            .map_err(|e| log::warn!("AbortController unavailable: {e:?}"))
            .ok();
        Self { controller }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }

    pub fn abort(&self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

impl Default for AbortHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `fetcher` whenever `key` changes and returns the current state.
///
/// The previous request is aborted and its generation retired before a new
/// one starts, and again when the component unmounts.
#[hook]
pub fn use_fetch<K, T, F, Fut>(key: K, fetcher: F) -> FetchState<T>
where
    K: PartialEq + Clone + 'static,
    T: Payload + Clone + 'static,
    F: FnOnce(K, Option<AbortSignal>) -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let state = use_state(|| FetchState::Loading);
    let tracker = use_mut_ref(RequestTracker::default);

    {
        let state = state.clone();
        use_effect_with(key, move |key| {
            let token = tracker.borrow_mut().begin();
            let abort = AbortHandle::new();
            let signal = abort.signal();
            let key = key.clone();
            let task_tracker = tracker.clone();

            state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let result = fetcher(key, signal).await;

                if !task_tracker.borrow().is_current(token) {
                    log::debug!("Discarding response of a superseded request");
                    return;
                }

                match FetchState::from_result(result) {
                    Some(next) => state.set(next),
                    None => log::debug!("Request aborted"),
                }
            });

            move || {
                tracker.borrow_mut().cancel();
                abort.abort();
            }
        });
    }

    (*state).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Detail(&'static str);

    impl Payload for Detail {}

    #[test]
    fn latest_token_is_the_only_current_one() {
        let mut tracker = RequestTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();

        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn superseded_request_never_commits_in_any_order() {
        // X starts, Y supersedes it; whichever resolves first, only Y applies.
        for x_resolves_first in [true, false] {
            let mut tracker = RequestTracker::default();
            let mut committed: Option<&str> = None;

            let x = tracker.begin();
            let y = tracker.begin();

            let order = if x_resolves_first {
                [(x, "X"), (y, "Y")]
            } else {
                [(y, "Y"), (x, "X")]
            };
            for (token, outcome) in order {
                if tracker.is_current(token) {
                    committed = Some(outcome);
                }
            }

            assert_eq!(committed, Some("Y"));
        }
    }

    #[test]
    fn cancel_retires_in_flight_token() {
        let mut tracker = RequestTracker::default();
        let token = tracker.begin();
        tracker.cancel();
        assert!(!tracker.is_current(token));
    }

    #[test]
    fn single_flight_refuses_second_start_while_running() {
        let mut flight = SingleFlight::default();
        let token = flight.try_begin().unwrap();

        assert!(flight.is_running());
        assert_eq!(flight.try_begin(), None);

        assert!(flight.finish(token));
        assert!(!flight.is_running());
        assert!(flight.try_begin().is_some());
    }

    #[test]
    fn single_flight_finish_is_one_shot() {
        let mut flight = SingleFlight::default();
        let token = flight.try_begin().unwrap();

        assert!(flight.finish(token));
        assert!(!flight.finish(token));
    }

    #[test]
    fn cancelled_request_cannot_finish() {
        let mut flight = SingleFlight::default();
        let cancelled = flight.try_begin().unwrap();
        flight.cancel();

        assert!(!flight.is_running());
        assert!(!flight.finish(cancelled));

        // A late result of the cancelled request leaves a newer one running.
        let next = flight.try_begin().unwrap();
        assert!(!flight.finish(cancelled));
        assert!(flight.is_running());
        assert!(flight.finish(next));
    }

    #[test]
    fn aborted_result_keeps_state() {
        assert_eq!(FetchState::<Detail>::from_result(Err(FetchError::Aborted)), None);
    }

    #[test]
    fn results_map_to_states() {
        assert_eq!(
            FetchState::from_result(Ok(Detail("a"))),
            Some(FetchState::Ready(Detail("a")))
        );
        assert_eq!(
            FetchState::<Vec<u32>>::from_result(Ok(Vec::new())),
            Some(FetchState::Empty)
        );
        assert_eq!(
            FetchState::<Detail>::from_result(Err(FetchError::Http {
                status: 404,
                message: "not found".into(),
            })),
            Some(FetchState::Error("not found".into()))
        );
    }
}
