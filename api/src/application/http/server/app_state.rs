use std::sync::Arc;

use sfie_core::application::SfieService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SfieService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SfieService) -> Self {
        Self { args, service }
    }
}
