use super::MeterSignal;

/// Receives lifecycle signals from the host's event source.
pub trait SignalHandler {
    fn handle_signal(&mut self, signal: &MeterSignal);

    /// Handle a batch, in order.
    fn handle_signals(&mut self, signals: &[MeterSignal]) {
        for signal in signals {
            self.handle_signal(signal);
        }
    }
}
