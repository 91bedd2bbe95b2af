pub mod d001_reports;
