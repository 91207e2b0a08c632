mod health_check;
mod helpers;
mod submission_client;
