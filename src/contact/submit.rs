use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;
use log::debug;
use thiserror::Error;

use crate::contact::form::{FormData, FormErrors};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("submission rejected by the receiving side")]
    Validation(FormErrors),
    #[error("submission could not be delivered: {0}")]
    Transport(String),
}

/// Whatever receives a contact message. The page only awaits the outcome.
pub trait ContactSubmitter {
    fn submit(&self, message: FormData) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Waits for a fixed delay and reports success. No request leaves the page.
pub struct SimulatedSubmitter {
    delay_ms: u32,
}

impl SimulatedSubmitter {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl ContactSubmitter for SimulatedSubmitter {
    fn submit(&self, message: FormData) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let delay_ms = self.delay_ms;
        async move {
            match serde_json::to_string(&message) {
                Ok(payload) => debug!("Simulating contact submission: {}", payload),
                Err(e) => debug!("Simulating contact submission (payload not serializable: {})", e),
            }
            TimeoutFuture::new(delay_ms).await;
            Ok(())
        }
        .boxed_local()
    }
}

/// Shared handle so a submitter can travel through component props.
#[derive(Clone)]
pub struct SubmitterHandle(pub Rc<dyn ContactSubmitter>);

impl SubmitterHandle {
    pub fn simulated(delay_ms: u32) -> Self {
        Self(Rc::new(SimulatedSubmitter::new(delay_ms)))
    }
}

impl PartialEq for SubmitterHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
