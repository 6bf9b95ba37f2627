use std::sync::Arc;

use oliveml_core::application::OliveService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: OliveService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: OliveService) -> Self {
        Self { args, service }
    }
}
