//! Port sinks: receivers for per-port detail after a port is declared.

/// Upcast to `&mut dyn PlainPortSink`, implemented for every sized sink.
///
/// Lets the default methods of [`PlainPortSink`] return `self` even when
/// called through a trait object.
pub trait AsPlainPortSink {
    fn as_plain_port_sink(&mut self) -> &mut dyn PlainPortSink;
}

impl<T: PlainPortSink> AsPlainPortSink for T {
    fn as_plain_port_sink(&mut self) -> &mut dyn PlainPortSink {
        self
    }
}

/// A sink for an audio or event port.
///
/// Every method defaults to a no-op that returns the sink, so implementors
/// override only what they care about. Direction stays input unless
/// [`output`](Self::output) is called.
pub trait PlainPortSink: AsPlainPortSink {
    /// Called if it's an input port.
    fn input(&mut self) -> &mut dyn PlainPortSink {
        self.as_plain_port_sink()
    }

    /// Called if it's an output port.
    fn output(&mut self) -> &mut dyn PlainPortSink {
        self.as_plain_port_sink()
    }

    /// Append free-form text to this port.
    fn annotate(&mut self, _text: &str) -> &mut dyn PlainPortSink {
        self.as_plain_port_sink()
    }
}

/// Upcast to `&mut dyn ControlPortSink`, implemented for every sized sink.
pub trait AsControlPortSink {
    fn as_control_port_sink(&mut self) -> &mut dyn ControlPortSink;
}

impl<T: ControlPortSink> AsControlPortSink for T {
    fn as_control_port_sink(&mut self) -> &mut dyn ControlPortSink {
        self
    }
}

/// A sink for a control port.
///
/// Same shape as [`PlainPortSink`] plus range and flag attributes. Calling
/// both range methods leaves the later one in effect; nothing is validated.
pub trait ControlPortSink: AsControlPortSink {
    /// Called if it's an input port.
    fn input(&mut self) -> &mut dyn ControlPortSink {
        self.as_control_port_sink()
    }

    /// Called if it's an output port.
    fn output(&mut self) -> &mut dyn ControlPortSink {
        self.as_control_port_sink()
    }

    /// Mark the port as using linear range `[from, to]`.
    fn linear_range(&mut self, _from: f64, _to: f64) -> &mut dyn ControlPortSink {
        self.as_control_port_sink()
    }

    /// Mark the port as using logarithmic range `[from, to]`.
    fn logarithmic_range(&mut self, _from: f64, _to: f64) -> &mut dyn ControlPortSink {
        self.as_control_port_sink()
    }

    /// Mark the port as an on/off switch.
    fn toggle(&mut self) -> &mut dyn ControlPortSink {
        self.as_control_port_sink()
    }

    /// Mark the port as a momentary trigger.
    fn trigger(&mut self) -> &mut dyn ControlPortSink {
        self.as_control_port_sink()
    }

    /// Restrict the port to whole numbers.
    fn integer(&mut self) -> &mut dyn ControlPortSink {
        self.as_control_port_sink()
    }

    /// Append free-form text to this port.
    fn annotate(&mut self, _text: &str) -> &mut dyn ControlPortSink {
        self.as_control_port_sink()
    }
}

/// Port sink that ignores everything.
///
/// Handy for plugin sinks that only care about plugin-level information
/// but still have to hand out a port sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPort;

impl PlainPortSink for NullPort {}

impl ControlPortSink for NullPort {}
