//! 사용자 관리 마이크로서비스 백엔드
//!
//! MongoDB 도큐먼트 스토어 위에 사용자 CRUD, 소프트 삭제, bcrypt 비밀번호
//! 해싱, 선언적 입력 검증, CSV 배치 임포트를 제공하는 HTTP 서비스입니다.
//!
//! # Features
//!
//! - **사용자 관리**: 생성, 조회, 부분 수정, 소프트 삭제, CSV 배치 생성
//! - **소프트 삭제**: `enabled` 플래그 기반 가시성 — 삭제된 레코드는
//!   모든 읽기/쓰기 경로에서 존재하지 않는 것과 동일
//! - **유니크 제약**: `email`/`userName` 유니크 인덱스, 쓰기 시점 감지
//! - **MongoDB**: 원자적 find-one-and-update 기반 수정/삭제
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증 + 위임
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 소프트 삭제 규약, 해싱, 원자적 수정
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
