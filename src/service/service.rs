use std::io::{self, Stdout};

use crate::repository::repository::{DeckApi, Repository};

/// Runs guessing games against a deck service, writing card and outcome
/// lines to `output`.
pub struct Service<A: DeckApi = Repository, W: io::Write = Stdout> {
    pub(in crate::service) repository: A,
    pub(in crate::service) output: W,
}

impl<A: DeckApi> Service<A, Stdout> {
    pub fn new(repository: A) -> Service<A, Stdout> {
        Service {
            repository,
            output: io::stdout(),
        }
    }
}

impl<A: DeckApi, W: io::Write> Service<A, W> {
    pub fn with_output(repository: A, output: W) -> Service<A, W> {
        Service { repository, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
