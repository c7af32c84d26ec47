pub mod announcers;
