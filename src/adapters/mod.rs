//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements  | Connects to                     |
//! |-------------|-------------|---------------------------------|
//! | `clock`     | —           | Host wall clock (epoch millis)  |
//! | `json_feed` | EventSink   | JSON-lines feed on any writer   |
//! | `log_sink`  | EventSink   | Console log output              |
//! | `weather`   | WeatherPort | Synthesized en-route conditions |

pub mod clock;
pub mod json_feed;
pub mod log_sink;
pub mod weather;
