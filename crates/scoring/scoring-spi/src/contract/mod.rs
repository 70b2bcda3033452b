mod outlier_model;

pub use outlier_model::OutlierModel;
