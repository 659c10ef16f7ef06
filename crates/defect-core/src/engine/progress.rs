use nalgebra::Point3;

/// Advisory events emitted during the transformation for diagnostic
/// display. These carry no correctness obligations; a run with no reporter
/// attached behaves identically.
#[derive(Debug, Clone)]
pub enum Event {
    /// Species inventory of the structure about to be transformed.
    StructureLoaded {
        symbols: Vec<String>,
        counts: Vec<usize>,
        total_atoms: usize,
    },
    /// The atom chosen for removal and the target it was matched against.
    SiteSelected {
        symbol: String,
        position: Point3<f64>,
        target: Point3<f64>,
        distance: f64,
    },
    /// A species' count has reached zero. It stays listed in the output.
    SiteExhausted { symbol: String },
    /// A requested symbol is not a recognized chemical element.
    UnrecognizedSymbol { symbol: String },
    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Event) + Send + Sync + 'a>;

/// Capability interface for diagnostic reporting: one `report` operation,
/// injectable by the caller.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Event) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
