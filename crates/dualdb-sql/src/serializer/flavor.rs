use super::Serializer;

use dualdb_core::Flavor;

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer::new(Flavor::Sqlite)
    }

    pub fn postgresql() -> Serializer {
        Serializer::new(Flavor::Postgresql)
    }

    pub fn mysql() -> Serializer {
        Serializer::new(Flavor::Mysql)
    }
}
