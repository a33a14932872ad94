pub mod card;
pub mod controller;
pub mod display;
pub mod event;
pub mod form;
pub mod page;
pub mod view;
