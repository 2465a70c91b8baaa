pub mod athlete;
pub mod category;
pub mod training_center;

pub use athlete::AthleteRepository;
pub use category::CategoryRepository;
pub use training_center::TrainingCenterRepository;
