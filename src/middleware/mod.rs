/*
 * Responsibility
 * - public interface of middleware (re-export)
 */
pub mod http;
