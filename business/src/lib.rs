pub mod application {
    pub mod cart {
        pub mod add;
        pub mod change_quantity;
        pub mod checkout;
        pub mod get;
        pub mod remove;
    }
    pub mod catalog {
        pub mod get_all;
        pub mod get_by_id;
        pub mod load;
    }
    pub mod drawer {
        pub mod change;
        pub mod get;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod change_quantity;
            pub mod checkout;
            pub mod get;
            pub mod remove;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod load;
        }
    }
    pub mod drawer {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod change;
            pub mod get;
        }
    }
}
