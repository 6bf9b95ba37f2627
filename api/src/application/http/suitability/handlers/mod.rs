pub mod predict_suitability;
