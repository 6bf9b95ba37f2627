pub mod recommend_foods;
