/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Token endpoint models
pub mod auth;
/// HTTP request execution and response classification
pub mod http;
/// Search request models
pub mod requests;
/// Search response models
pub mod responses;
