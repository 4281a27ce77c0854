pub mod absensi;
