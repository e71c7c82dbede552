use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use frontdesk::engine::{CallRecord, Notice};
use frontdesk::errors::Result;
use frontdesk::panel::PanelBackend;

/// What a `RecordingPanel` has seen so far.
#[derive(Debug, Default)]
pub struct PanelLog {
    pub announcements: Vec<CallRecord>,
    pub notices: Vec<Notice>,
}

/// A fake panel that records every announcement and notice instead of
/// printing or speaking.
pub struct RecordingPanel {
    log: Arc<Mutex<PanelLog>>,
}

impl RecordingPanel {
    pub fn new(log: Arc<Mutex<PanelLog>>) -> Self {
        Self { log }
    }
}

impl PanelBackend for RecordingPanel {
    fn announce(
        &mut self,
        call: CallRecord,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let log = Arc::clone(&self.log);
        Box::pin(async move {
            log.lock().unwrap().announcements.push(call);
            Ok(())
        })
    }

    fn report(&mut self, notice: Notice) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let log = Arc::clone(&self.log);
        Box::pin(async move {
            log.lock().unwrap().notices.push(notice);
            Ok(())
        })
    }
}
