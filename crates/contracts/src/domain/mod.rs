pub mod sales_order;
