pub mod bookings_service;
