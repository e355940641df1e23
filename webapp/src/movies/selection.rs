use api::movie::Movie;

// backing state for the detail overlay
//
// deliberately independent of the search lifecycle: an open overlay
// survives page changes and new searches, and only an explicit close (or
// the user picking another movie) replaces it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    current: Option<Movie>,
}

impl Selection {
    pub fn select(&mut self, movie: Movie) {
        self.current = Some(movie);
    }

    // safe to call however many times the presentation layer feels like it
    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Movie> {
        self.current.as_ref()
    }
}
