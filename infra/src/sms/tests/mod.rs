mod adapter_tests;
mod mock_sms_tests;
mod sms_service_tests;
