use crate::models::UserData;

pub fn new_user_data() -> UserData {
    UserData::new("Bikash Jena", "bikash.jena@example.com", 29)
}

pub fn update_user_data() -> UserData {
    UserData::new("Paresh Samal", "paresh.samal@example.com", 30)
}
