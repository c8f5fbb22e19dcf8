pub mod application {
    pub mod cart {
        pub mod store;
    }
    pub mod checkout {
        pub mod credentials;
        pub mod submit;
    }
    pub mod order {
        pub mod create;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod money;
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod storage;
    }
    pub mod checkout {
        pub mod errors;
        pub mod gateway;
        pub mod services;
        pub mod use_cases {
            pub mod submit;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
        }
    }
    pub mod session {
        pub mod errors;
        pub mod model;
        pub mod services;
    }
}

#[cfg(test)]
mod testing;
