pub mod city_name;
pub mod client;
pub mod contact_name;
pub mod contact_submission;
pub mod email_address;
pub mod mobile_number;
pub mod new_contact;
pub mod new_subscriber;
pub mod project;
pub mod subscriber;
