mod test_candle;
mod test_symbol;
