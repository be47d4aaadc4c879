pub mod application {
    pub mod favorite {
        pub mod add;
        pub mod contains;
        pub mod list;
        pub mod list_recipes;
        pub mod remove;
        pub mod store;
    }
    pub mod recipe {
        pub mod get_by_id;
        pub mod random;
        pub mod search;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod storage;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod favorite {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod add;
            pub mod contains;
            pub mod list;
            pub mod list_recipes;
            pub mod remove;
        }
    }
    pub mod recipe {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod get_by_id;
            pub mod random;
            pub mod search;
        }
    }
}
