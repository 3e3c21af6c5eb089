/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// REST endpoints of the Finnhub API
pub mod endpoint;
/// Exchange table used by the symbol listing endpoint
pub mod exchange;
/// Request building, transport and response decoding
pub mod http;
