mod models;
mod view;
