use crate::service::NutritionService;

#[derive(Clone)]
pub struct AppState {
    pub service: NutritionService,
}

impl AppState {
    pub fn new(service: NutritionService) -> Self {
        Self { service }
    }
}
