pub mod application {
    pub mod collection {
        pub mod sample_data;
        pub mod store;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod food_item {
        pub mod errors;
        pub mod freshness;
        pub mod model;
        pub mod query;
        pub mod repository;
        pub mod shelf_life;
        pub mod stats;
        pub mod value_objects;
    }
    pub mod shared {
        pub mod dates;
    }
}
