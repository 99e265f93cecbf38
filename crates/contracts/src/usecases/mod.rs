pub mod consolidate_orders;
