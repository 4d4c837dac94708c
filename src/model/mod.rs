/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Outcomes, rejections and transport errors
pub mod outcome;
/// Outgoing request description
pub mod request;
/// Completed response
pub mod response;
