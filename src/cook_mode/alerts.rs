/// Timer-completion port: a short audio cue plus a system notification,
/// both best-effort. Denied permissions or missing capabilities must never
/// abort the engine.
pub trait AlertSink {
    fn timer_finished(&mut self, step_index: usize);
}

/// Default port: alerts silently unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAlert;

impl AlertSink for NoopAlert {
    fn timer_finished(&mut self, _step_index: usize) {}
}

/// Console-backed alert used by the CLI. The BEL character stands in for
/// the notification sound on terminals that honor it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleAlert;

impl AlertSink for ConsoleAlert {
    fn timer_finished(&mut self, step_index: usize) {
        println!("\x07Timer finished! Step {} timer completed", step_index + 1);
    }
}
