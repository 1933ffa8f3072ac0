pub mod rcv_source;
