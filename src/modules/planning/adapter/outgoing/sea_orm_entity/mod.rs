pub mod plannings;
