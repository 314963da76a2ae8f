//! Conversion state and the controller that keeps it in sync with the rate service.
//!
//! Every input change cancels the request in flight and issues a new one, so at
//! most one result is live and a slow stale response can never overwrite the
//! answer for newer input.

use super::currency::{Catalog, CurrencyRecord, DEFAULT_FROM, DEFAULT_TO};
use super::format::Summary;
use super::rate::{ConversionRequest, ConversionResult, RateError, RateProvider};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionState {
    pub amount_text: String,
    pub from: CurrencyRecord,
    pub to: CurrencyRecord,
    pub last_result: Option<ConversionResult>,
    pub is_fetching: bool,
}

impl ConversionState {
    pub fn new(from: CurrencyRecord, to: CurrencyRecord) -> Self {
        Self {
            amount_text: String::new(),
            from,
            to,
            last_result: None,
            is_fetching: false,
        }
    }

    pub fn from_code(&self) -> &'static str {
        self.from.code
    }

    pub fn to_code(&self) -> &'static str {
        self.to.code
    }

    fn inputs(&self) -> (String, &'static str, &'static str) {
        (self.amount_text.clone(), self.from.code, self.to.code)
    }
}

struct Shared {
    state: ConversionState,
    // Id of the only request whose settlement may touch `state`.
    live_request: Option<u64>,
}

struct InFlightRequest {
    id: u64,
    token: CancellationToken,
    handle: JoinHandle<()>,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct ConversionController<P: RateProvider + 'static> {
    provider: Arc<P>,
    catalog: Catalog,
    shared: Arc<Mutex<Shared>>,
    in_flight: Option<InFlightRequest>,
    next_id: u64,
    debounce: Duration,
}

impl<P: RateProvider + 'static> ConversionController<P> {
    /// Creates an idle controller converting from USD to EUR.
    pub fn new(provider: Arc<P>, catalog: Catalog) -> Result<Self, RateError> {
        Self::with_currencies(provider, catalog, DEFAULT_FROM, DEFAULT_TO)
    }

    pub fn with_currencies(
        provider: Arc<P>,
        catalog: Catalog,
        from: &str,
        to: &str,
    ) -> Result<Self, RateError> {
        let from = Self::lookup(&catalog, from)?;
        let to = Self::lookup(&catalog, to)?;
        Ok(Self {
            provider,
            catalog,
            shared: Arc::new(Mutex::new(Shared {
                state: ConversionState::new(from, to),
                live_request: None,
            })),
            in_flight: None,
            next_id: 0,
            debounce: Duration::ZERO,
        })
    }

    /// Waits `debounce` after each input change before contacting the service.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    fn lookup(catalog: &Catalog, code: &str) -> Result<CurrencyRecord, RateError> {
        catalog
            .find(code)
            .copied()
            .ok_or_else(|| RateError::UnsupportedCurrency(code.to_string()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn snapshot(&self) -> ConversionState {
        lock(&self.shared).state.clone()
    }

    pub fn is_fetching(&self) -> bool {
        lock(&self.shared).state.is_fetching
    }

    pub fn last_result(&self) -> Option<ConversionResult> {
        lock(&self.shared).state.last_result.clone()
    }

    pub fn from_record(&self) -> CurrencyRecord {
        lock(&self.shared).state.from
    }

    pub fn to_record(&self) -> CurrencyRecord {
        lock(&self.shared).state.to
    }

    /// Display summary for the current state, if there is a result and an amount.
    pub fn summary(&self) -> Option<Summary> {
        let shared = lock(&self.shared);
        let state = &shared.state;
        let result = state.last_result.as_ref()?;
        Summary::build(&state.amount_text, &state.from, &state.to, result)
    }

    /// Replaces the amount text and fetches the conversion for it.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime, since the request runs on a
    /// spawned task.
    pub fn set_amount(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.update(|state| state.amount_text = text);
    }

    /// Selects the source currency. Unknown codes leave the state untouched.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime, since the request runs on a
    /// spawned task.
    pub fn set_from_currency(&mut self, code: &str) -> Result<(), RateError> {
        let record = Self::lookup(&self.catalog, code)?;
        self.update(|state| state.from = record);
        Ok(())
    }

    /// Selects the target currency. Unknown codes leave the state untouched.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime, since the request runs on a
    /// spawned task.
    pub fn set_to_currency(&mut self, code: &str) -> Result<(), RateError> {
        let record = Self::lookup(&self.catalog, code)?;
        self.update(|state| state.to = record);
        Ok(())
    }

    /// Exchanges source and target in a single update.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime, since the request runs on a
    /// spawned task.
    pub fn swap(&mut self) {
        self.update(|state| std::mem::swap(&mut state.from, &mut state.to));
    }

    /// Re-issues the request for the current inputs.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime, since the request runs on a
    /// spawned task.
    pub fn refresh(&mut self) {
        self.issue();
    }

    /// Cancels the request in flight, if any, and clears the fetching flag.
    pub fn cancel(&mut self) {
        self.cancel_in_flight();
        let mut shared = lock(&self.shared);
        shared.live_request = None;
        shared.state.is_fetching = false;
    }

    /// Waits until the current request settles.
    pub async fn settled(&mut self) {
        let Some(request) = self.in_flight.take() else {
            return;
        };
        if let Err(e) = request.handle.await {
            if e.is_panic() {
                warn!(id = request.id, error = %e, "Conversion task panicked");
                let mut shared = lock(&self.shared);
                if shared.live_request == Some(request.id) {
                    shared.live_request = None;
                    shared.state.is_fetching = false;
                }
            }
        }
    }

    // Applies `change` and starts a new fetch cycle if any input changed.
    fn update(&mut self, change: impl FnOnce(&mut ConversionState)) {
        let changed = {
            let mut shared = lock(&self.shared);
            let before = shared.state.inputs();
            change(&mut shared.state);
            shared.state.inputs() != before
        };
        if changed {
            self.issue();
        }
    }

    fn cancel_in_flight(&mut self) {
        if let Some(request) = self.in_flight.take() {
            debug!(id = request.id, "Cancelling superseded conversion request");
            request.token.cancel();
            request.handle.abort();
        }
    }

    fn issue(&mut self) {
        self.cancel_in_flight();
        self.next_id += 1;
        let id = self.next_id;

        let request = {
            let mut shared = lock(&self.shared);
            shared.live_request = Some(id);
            shared.state.is_fetching = true;
            let (amount_text, from, to) = shared.state.inputs();
            ConversionRequest::new(amount_text, from, to)
        };
        debug!(id, ?request, "Issuing conversion request");

        let token = CancellationToken::new();
        let handle = tokio::spawn(run_request(
            Arc::clone(&self.provider),
            Arc::clone(&self.shared),
            request,
            id,
            token.clone(),
            self.debounce,
        ));
        self.in_flight = Some(InFlightRequest { id, token, handle });
    }
}

impl<P: RateProvider + 'static> Drop for ConversionController<P> {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}

async fn run_request<P: RateProvider>(
    provider: Arc<P>,
    shared: Arc<Mutex<Shared>>,
    request: ConversionRequest,
    id: u64,
    token: CancellationToken,
    debounce: Duration,
) {
    let fetch = async {
        if !debounce.is_zero() {
            tokio::time::sleep(debounce).await;
        }
        provider.convert(&request).await
    };

    let outcome = tokio::select! {
        _ = token.cancelled() => None,
        outcome = fetch => Some(outcome),
    };

    match outcome {
        Some(outcome) => apply_outcome(&shared, id, &token, outcome),
        None => debug!(id, "Conversion request cancelled"),
    }
}

fn apply_outcome(
    shared: &Mutex<Shared>,
    id: u64,
    token: &CancellationToken,
    outcome: Result<ConversionResult, RateError>,
) {
    let mut shared = lock(shared);
    if token.is_cancelled() || shared.live_request != Some(id) {
        debug!(id, "Discarding stale conversion response");
        return;
    }

    match outcome {
        Ok(result) => {
            debug!(id, ?result, "Conversion succeeded");
            shared.state.last_result = Some(result);
        }
        Err(RateError::InvalidAmount(text)) => {
            debug!(id, amount = %text, "Skipping conversion for invalid amount");
        }
        Err(e) => {
            warn!(id, error = %e, "Conversion failed, keeping previous result");
        }
    }
    shared.live_request = None;
    shared.state.is_fetching = false;
}
